/// Popup view model: turns the stored record into what the popup shows
use wasm_bindgen::JsValue;

use crate::bridge;
use crate::domain::failed_path;
use crate::error::{HelperError, Result};
use crate::failure_data::StoredFailure;
use crate::storage::FailureStore;
use crate::suggestions::{Suggestion, get_suggestions};
use crate::time_ago::time_ago;

/// A failure ready for display
#[derive(Debug, Clone, PartialEq)]
pub struct FailureView {
    pub domain: String,
    pub time_ago: String,
    pub error_code: String,
    /// `Err` holds the message shown in place of the list
    pub suggestions: std::result::Result<Vec<Suggestion>, String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PopupView {
    StorageUnavailable,
    LoadFailed(String),
    NoFailure,
    Failure(FailureView),
}

/// Compute the popup contents from a storage read
pub fn present(loaded: Result<StoredFailure>, now: i64) -> PopupView {
    let stored = match loaded {
        Ok(stored) => stored,
        Err(HelperError::StorageUnavailable) => return PopupView::StorageUnavailable,
        Err(e) => return PopupView::LoadFailed(format!("Error retrieving data: {}", e)),
    };

    let failed_time = stored.failed_time;
    let Some(record) = stored.into_record() else {
        return PopupView::NoFailure;
    };

    let path = failed_path(&record.failed_url);
    let suggestions = get_suggestions(&record.failed_domain, &path).map_err(|e| {
        log::error!("Error building suggestions: {}", e);
        format!("Could not load suggestions: {}", e)
    });

    let error_code = if record.error_code.is_empty() {
        "Unknown error".to_string()
    } else {
        record.error_code
    };

    PopupView::Failure(FailureView {
        domain: record.failed_domain,
        time_ago: time_ago(failed_time, now),
        error_code,
        suggestions,
    })
}

/// Read the store, or report it missing, then present
pub async fn load_view<S: FailureStore>(store: Option<&S>, now: i64) -> PopupView {
    let loaded = match store {
        Some(store) => store.load().await,
        None => Err(HelperError::StorageUnavailable),
    };
    present(loaded, now)
}

/// Something that can open a URL in a new browsing context
#[allow(async_fn_in_trait)]
pub trait UrlOpener {
    async fn open(&self, url: &str) -> Result<()>;
}

/// chrome.tabs.create when the tabs API exists, window.open otherwise
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowserOpener {
    Tabs,
    Window,
}

impl BrowserOpener {
    pub fn detect() -> BrowserOpener {
        if bridge::hasTabsApi() {
            BrowserOpener::Tabs
        } else {
            BrowserOpener::Window
        }
    }
}

impl UrlOpener for BrowserOpener {
    async fn open(&self, url: &str) -> Result<()> {
        match self {
            BrowserOpener::Tabs => bridge::createTab(url)
                .await
                .map_err(|e| HelperError::OpenFailed(format!("{}: {:?}", url, e))),
            BrowserOpener::Window => {
                let window = web_sys::window()
                    .ok_or_else(|| HelperError::OpenFailed(format!("{}: no window", url)))?;
                window
                    .open_with_url_and_target(url, "_blank")
                    .map_err(|e: JsValue| HelperError::OpenFailed(format!("{}: {:?}", url, e)))?;
                Ok(())
            }
        }
    }
}

/// Open a suggestion; failures are logged, never surfaced
pub async fn activate<O: UrlOpener>(opener: &O, suggestion: &Suggestion) {
    if let Err(e) = opener.open(&suggestion.url).await {
        log::error!("{}", e);
    }
}
