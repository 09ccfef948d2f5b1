use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuoteError {
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Persisted state is corrupt: {0}")]
    CorruptState(String),

    #[error("Failed to sync with the remote collection: {0}")]
    SyncFailed(String),

    #[error("Invalid import payload: {0}")]
    ImportFormat(String),

    #[error("Storage failure: {0}")]
    Storage(String),
}

impl From<reqwest::Error> for QuoteError {
    fn from(error: reqwest::Error) -> Self {
        QuoteError::SyncFailed(error.to_string())
    }
}

impl From<std::io::Error> for QuoteError {
    fn from(error: std::io::Error) -> Self {
        QuoteError::Storage(error.to_string())
    }
}
