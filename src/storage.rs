/// Persistence of the failure record in chrome.storage.local
use wasm_bindgen::JsValue;

use crate::bridge;
use crate::error::{HelperError, Result};
use crate::failure_data::{FAILURE_KEYS, FailureRecord, StoredFailure};

/// Key-value store holding at most one failure record
#[allow(async_fn_in_trait)]
pub trait FailureStore {
    /// Read whatever subset of the record keys is present
    async fn load(&self) -> Result<StoredFailure>;

    /// Write all four keys, replacing the previous record
    async fn save(&self, record: &FailureRecord) -> Result<()>;

    /// Remove all four keys
    async fn clear(&self) -> Result<()>;
}

/// chrome.storage.local, reached through the JS bridge
#[derive(Debug, Clone, Copy, Default)]
pub struct ChromeStorage;

impl ChromeStorage {
    /// `None` when the host exposes no storage API at all
    pub fn detect() -> Option<ChromeStorage> {
        bridge::hasStorageApi().then_some(ChromeStorage)
    }
}

/// The record keys as a JS array, for `get` and `remove`
pub fn keys_to_js() -> Result<JsValue> {
    serde_wasm_bindgen::to_value(&FAILURE_KEYS)
        .map_err(|e| HelperError::Serialization(format!("{:?}", e)))
}

/// The record as a plain JS object keyed like storage
pub fn record_to_js(record: &FailureRecord) -> Result<JsValue> {
    serde_wasm_bindgen::to_value(record)
        .map_err(|e| HelperError::Serialization(format!("{:?}", e)))
}

/// Whatever `chrome.storage.local.get` resolved with
pub fn stored_from_js(stored_js: JsValue) -> Result<StoredFailure> {
    if stored_js.is_null() || stored_js.is_undefined() {
        Ok(StoredFailure::default())
    } else {
        serde_wasm_bindgen::from_value(stored_js)
            .map_err(|e| HelperError::Serialization(format!("{:?}", e)))
    }
}

impl FailureStore for ChromeStorage {
    async fn load(&self) -> Result<StoredFailure> {
        let stored_js = bridge::getStorage(keys_to_js()?)
            .await
            .map_err(|e| HelperError::Storage(format!("{:?}", e)))?;

        stored_from_js(stored_js)
    }

    async fn save(&self, record: &FailureRecord) -> Result<()> {
        bridge::setStorage(record_to_js(record)?)
            .await
            .map_err(|e| HelperError::Storage(format!("{:?}", e)))
    }

    async fn clear(&self) -> Result<()> {
        bridge::removeStorage(keys_to_js()?)
            .await
            .map_err(|e| HelperError::Storage(format!("{:?}", e)))
    }
}

#[cfg(test)]
pub use memory::MemoryStore;


#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use serde_json::json;

    fn create_test_record(domain: &str) -> FailureRecord {
        FailureRecord {
            failed_domain: domain.to_string(),
            failed_url: format!("https://{}/", domain),
            failed_time: 1698508200000,
            error_code: "net::ERR_NAME_NOT_RESOLVED".to_string(),
        }
    }

    #[test]
    fn test_empty_store_loads_nothing() {
        let store = MemoryStore::new();
        let stored = block_on(store.load()).unwrap();
        assert_eq!(stored, StoredFailure::default());
    }

    #[test]
    fn test_save_then_load() {
        let store = MemoryStore::new();
        block_on(store.save(&create_test_record("example.com"))).unwrap();

        let record = block_on(store.load()).unwrap().into_record().unwrap();
        assert_eq!(record, create_test_record("example.com"));
    }

    #[test]
    fn test_save_overwrites() {
        let store = MemoryStore::new();
        block_on(store.save(&create_test_record("first.com"))).unwrap();
        block_on(store.save(&create_test_record("second.com"))).unwrap();

        let record = block_on(store.load()).unwrap().into_record().unwrap();
        assert_eq!(record.failed_domain, "second.com");
    }

    #[test]
    fn test_clear_removes_only_record_keys() {
        let store = MemoryStore::with_items(json!({
            "failedDomain": "example.com",
            "failedTime": 1,
            "theme": "dark",
        }));

        block_on(store.clear()).unwrap();

        for key in FAILURE_KEYS {
            assert!(!store.contains_key(key));
        }
        assert_eq!(store.snapshot(), json!({"theme": "dark"}));
    }

    #[test]
    fn test_failing_writes() {
        let store = MemoryStore::failing();

        assert!(matches!(block_on(store.save(&create_test_record("a.com"))), Err(HelperError::Storage(_))));
        assert!(block_on(store.clear()).is_err());
    }
}
