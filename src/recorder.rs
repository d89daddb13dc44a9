/// Background-side handling of page load failures and lifecycle events

use crate::domain::{extract_hostname, is_excluded_host, is_internal_url};
use crate::failure_data::{FailureEvent, FailureRecord, InstallReason, InstalledDetails};
use crate::storage::FailureStore;

/// Decide whether an event should be recorded, and for which hostname
///
/// Both event sources funnel through here so they filter identically.
/// URLs without a host (`file:`, `data:`) record an empty domain, which the
/// popup reads back as "no recent failure".
pub fn qualify(event: &FailureEvent) -> Option<String> {
    if !event.is_top_level || is_internal_url(&event.url) {
        return None;
    }

    let hostname = match extract_hostname(&event.url) {
        Ok(Some(hostname)) => hostname,
        Ok(None) => String::new(),
        Err(e) => {
            log::warn!("Error parsing URL {:?}: {}", event.url, e);
            return None;
        }
    };

    if is_excluded_host(&hostname) {
        log::debug!("Ignoring local address {}", hostname);
        return None;
    }

    Some(hostname)
}

/// Persist a qualifying failure, replacing any previous record
///
/// Returns the record written. Write errors are logged and swallowed.
pub async fn record_failure<S: FailureStore>(
    store: &S,
    event: FailureEvent,
    now: i64,
) -> Option<FailureRecord> {
    let failed_domain = qualify(&event)?;

    let record = FailureRecord {
        failed_domain,
        failed_url: event.url,
        failed_time: now,
        error_code: event.error,
    };

    match store.save(&record).await {
        Ok(()) => {
            log::info!("Saved failed domain: {} ({})", record.failed_domain, record.error_code);
            Some(record)
        }
        Err(e) => {
            log::error!("Error saving failed domain: {}", e);
            None
        }
    }
}

/// Install and update start the popup from a clean "no failure" state
pub async fn handle_installed<S: FailureStore>(store: &S, details: &InstalledDetails) {
    log::info!("Website Unavailable Helper installed ({:?}).", details.reason);

    if !matches!(details.reason, InstallReason::Install | InstallReason::Update) {
        return;
    }

    match store.clear().await {
        Ok(()) => log::info!("Storage cleared successfully"),
        Err(e) => log::error!("Error clearing storage: {}", e),
    }
}

pub fn handle_startup() {
    log::info!("Website Unavailable Helper started.");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::failure_data::{FAILURE_KEYS, NavigationErrorDetails, RequestErrorDetails};
    use crate::storage::MemoryStore;
    use futures::executor::block_on;
    use serde_json::json;

    const NOW: i64 = 1_700_000_000_000;

    fn main_frame(url: &str) -> FailureEvent {
        FailureEvent {
            url: url.to_string(),
            error: "net::ERR_NAME_NOT_RESOLVED".to_string(),
            is_top_level: true,
        }
    }

    #[test]
    fn test_qualify_top_level() {
        assert_eq!(qualify(&main_frame("https://www.example.com/a")), Some("www.example.com".to_string()));
    }

    #[test]
    fn test_qualify_rejects_subframes() {
        let event = FailureEvent {
            is_top_level: false,
            ..main_frame("https://example.com/")
        };
        assert_eq!(qualify(&event), None);
    }

    #[test]
    fn test_qualify_rejects_internal_and_local() {
        assert_eq!(qualify(&main_frame("chrome-extension://abc/popup.html")), None);
        assert_eq!(qualify(&main_frame("http://localhost:8080/")), None);
        assert_eq!(qualify(&main_frame("http://10.0.0.1/admin")), None);
        assert_eq!(qualify(&main_frame("not a url")), None);
    }

    #[test]
    fn test_qualify_hostless_url_gives_empty_domain() {
        assert_eq!(qualify(&main_frame("file:///tmp/missing.html")), Some(String::new()));
        assert_eq!(qualify(&main_frame("about:blank")), Some(String::new()));
    }

    #[test]
    fn test_record_failure_writes_record() {
        let store = MemoryStore::new();
        let written = block_on(record_failure(&store, main_frame("https://example.com/x"), NOW)).unwrap();

        assert_eq!(written.failed_domain, "example.com");
        assert_eq!(written.failed_url, "https://example.com/x");
        assert_eq!(written.failed_time, NOW);
        assert_eq!(written.error_code, "net::ERR_NAME_NOT_RESOLVED");

        let stored = block_on(store.load()).unwrap().into_record();
        assert_eq!(stored, Some(written));
    }

    #[test]
    fn test_non_qualifying_events_write_nothing() {
        let store = MemoryStore::new();
        let events = vec![
            FailureEvent { is_top_level: false, ..main_frame("https://example.com/") },
            main_frame("chrome-extension://abcdef/options.html"),
            main_frame("http://localhost/"),
            main_frame("http://192.168.0.1/"),
            main_frame("::::"),
        ];

        for event in events {
            assert_eq!(block_on(record_failure(&store, event, NOW)), None);
        }
        assert_eq!(store.snapshot(), json!({}));
    }

    #[test]
    fn test_ignored_event_keeps_previous_record() {
        let store = MemoryStore::new();
        block_on(record_failure(&store, main_frame("https://example.com/"), NOW));
        block_on(record_failure(&store, main_frame("http://127.0.0.1/"), NOW + 1));

        let record = block_on(store.load()).unwrap().into_record().unwrap();
        assert_eq!(record.failed_domain, "example.com");
        assert_eq!(record.failed_time, NOW);
    }

    #[test]
    fn test_hostless_failure_replaces_previous_record() {
        let store = MemoryStore::new();
        block_on(record_failure(&store, main_frame("https://example.com/"), NOW));

        let file_failure = FailureEvent {
            error: "net::ERR_FILE_NOT_FOUND".to_string(),
            ..main_frame("file:///tmp/missing.html")
        };
        let written = block_on(record_failure(&store, file_failure, NOW + 1_000)).unwrap();
        assert_eq!(written.failed_domain, "");

        let stored = block_on(store.load()).unwrap();
        assert_eq!(stored.failed_url.as_deref(), Some("file:///tmp/missing.html"));
        assert_eq!(stored.into_record(), None);
    }

    #[test]
    fn test_second_failure_overwrites_first() {
        let store = MemoryStore::new();
        block_on(record_failure(&store, main_frame("https://first.com/"), NOW));

        let second = FailureEvent {
            error: "net::ERR_CONNECTION_REFUSED".to_string(),
            ..main_frame("https://second.org/page")
        };
        block_on(record_failure(&store, second, NOW + 5_000));

        let record = block_on(store.load()).unwrap().into_record().unwrap();
        assert_eq!(record.failed_domain, "second.org");
        assert_eq!(record.failed_url, "https://second.org/page");
        assert_eq!(record.failed_time, NOW + 5_000);
        assert_eq!(record.error_code, "net::ERR_CONNECTION_REFUSED");
    }

    #[test]
    fn test_both_sources_record_the_same_way() {
        let request: RequestErrorDetails = serde_json::from_value(json!({
            "url": "https://down.example/", "type": "main_frame", "error": "net::ERR_TIMED_OUT"
        }))
        .unwrap();
        let navigation: NavigationErrorDetails = serde_json::from_value(json!({
            "url": "https://down.example/", "frameId": 0, "error": "net::ERR_TIMED_OUT"
        }))
        .unwrap();

        let from_request = block_on(record_failure(&MemoryStore::new(), request.into(), NOW));
        let from_navigation = block_on(record_failure(&MemoryStore::new(), navigation.into(), NOW));

        assert!(from_request.is_some());
        assert_eq!(from_request, from_navigation);
    }

    #[test]
    fn test_navigation_source_filters_internal_scheme() {
        let navigation = NavigationErrorDetails {
            url: "chrome-extension://abc/popup.html".to_string(),
            frame_id: 0,
            error: "net::ERR_FILE_NOT_FOUND".to_string(),
        };
        let store = MemoryStore::new();
        assert_eq!(block_on(record_failure(&store, navigation.into(), NOW)), None);
    }

    #[test]
    fn test_write_failure_is_swallowed() {
        let store = MemoryStore::failing();
        assert_eq!(block_on(record_failure(&store, main_frame("https://example.com/"), NOW)), None);
    }

    #[test]
    fn test_install_and_update_clear_storage() {
        for reason in [InstallReason::Install, InstallReason::Update] {
            let store = MemoryStore::with_items(json!({
                "failedDomain": "example.com",
                "failedUrl": "https://example.com/",
                "failedTime": NOW,
                "errorCode": "net::ERR_TIMED_OUT",
            }));

            block_on(handle_installed(&store, &InstalledDetails { reason }));

            for key in FAILURE_KEYS {
                assert!(!store.contains_key(key), "{} survived", key);
            }
        }
    }

    #[test]
    fn test_install_on_empty_storage() {
        let store = MemoryStore::new();
        block_on(handle_installed(&store, &InstalledDetails { reason: InstallReason::Install }));
        assert_eq!(store.snapshot(), json!({}));
    }

    #[test]
    fn test_other_install_reasons_keep_record() {
        let store = MemoryStore::new();
        block_on(record_failure(&store, main_frame("https://example.com/"), NOW));

        block_on(handle_installed(&store, &InstalledDetails { reason: InstallReason::Other }));

        assert!(store.contains_key("failedDomain"));
    }
}
