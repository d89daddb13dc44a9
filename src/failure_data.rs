/// Data structures for the failure record and the host events that produce it
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;

use crate::error::{HelperError, Result};

/// Keys written to chrome.storage.local. Always written and removed together.
pub const FAILURE_KEYS: [&str; 4] = ["failedDomain", "failedUrl", "failedTime", "errorCode"];

/// The last page load that failed. Only one exists at a time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FailureRecord {
    pub failed_domain: String,
    pub failed_url: String,
    pub failed_time: i64,
    pub error_code: String,
}

/// What storage hands back: any subset of the record's keys.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StoredFailure {
    #[serde(default)]
    pub failed_domain: Option<String>,
    #[serde(default)]
    pub failed_url: Option<String>,
    #[serde(default)]
    pub failed_time: Option<i64>,
    #[serde(default)]
    pub error_code: Option<String>,
}

impl StoredFailure {
    /// A stored object without a domain means "no recent failure".
    pub fn into_record(self) -> Option<FailureRecord> {
        let failed_domain = self.failed_domain.filter(|d| !d.is_empty())?;
        Some(FailureRecord {
            failed_domain,
            failed_url: self.failed_url.unwrap_or_default(),
            failed_time: self.failed_time.unwrap_or_default(),
            error_code: self.error_code.unwrap_or_default(),
        })
    }
}

impl From<FailureRecord> for StoredFailure {
    fn from(record: FailureRecord) -> Self {
        StoredFailure {
            failed_domain: Some(record.failed_domain),
            failed_url: Some(record.failed_url),
            failed_time: Some(record.failed_time),
            error_code: Some(record.error_code),
        }
    }
}

/// chrome.webRequest.onErrorOccurred details
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RequestErrorDetails {
    pub url: String,
    #[serde(rename = "type")]
    pub resource_type: String,
    pub error: String,
}

/// chrome.webNavigation.onErrorOccurred details
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NavigationErrorDetails {
    pub url: String,
    pub frame_id: i64,
    pub error: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum InstallReason {
    Install,
    Update,
    #[serde(other)]
    Other,
}

/// chrome.runtime.onInstalled details
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct InstalledDetails {
    pub reason: InstallReason,
}

/// A failure notification from either source, reduced to what the recorder needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureEvent {
    pub url: String,
    pub error: String,
    pub is_top_level: bool,
}

impl From<RequestErrorDetails> for FailureEvent {
    fn from(details: RequestErrorDetails) -> Self {
        FailureEvent {
            is_top_level: details.resource_type == "main_frame",
            url: details.url,
            error: details.error,
        }
    }
}

impl From<NavigationErrorDetails> for FailureEvent {
    fn from(details: NavigationErrorDetails) -> Self {
        FailureEvent {
            is_top_level: details.frame_id == 0,
            url: details.url,
            error: details.error,
        }
    }
}

/// Deserialize the details object a chrome.* event listener receives
pub fn details_from_js<T: DeserializeOwned>(details: JsValue) -> Result<T> {
    serde_wasm_bindgen::from_value(details).map_err(|e| HelperError::Serialization(format!("{:?}", e)))
}
