/// Error type shared by the background recorder and the popup

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HelperError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Storage API is not available")]
    StorageUnavailable,

    #[error("{0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Cannot build suggestions for an empty domain")]
    EmptyDomain,

    #[error("Failed to open {0}")]
    OpenFailed(String),
}

pub type Result<T> = std::result::Result<T, HelperError>;
