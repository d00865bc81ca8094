//! Error types for the recipe store

use thiserror::Error;

/// Everything that can go wrong inside the store and its collaborators.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("server returned status {status}")]
    Status { status: u16 },

    #[error("snapshot io failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("invalid draft: {0}")]
    InvalidDraft(String),
}
