// Error types for feedcache.
// Separates opaque storage backend failures from the errors callers see.

use thiserror::Error;

/// Failure reported by a storage backend. Never inspected by the cache
/// manager, only wrapped and passed along.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("store worker is no longer running")]
    Closed,

    #[error("file store must be created inside a tokio runtime")]
    NoRuntime,

    #[error("{0}")]
    Other(String),
}

#[derive(Error, Debug)]
pub enum FeedError {
    #[error("failed to delete cached feed: {0}")]
    DeletionFailed(#[source] StoreError),

    #[error("failed to insert feed into cache: {0}")]
    InsertionFailed(#[source] StoreError),

    #[error("failed to retrieve cached feed: {0}")]
    RetrievalFailed(#[source] StoreError),

    #[error("failed to open feed store: {0}")]
    StoreUnavailable(#[source] StoreError),

    #[error("invalid data received from feed endpoint")]
    InvalidData,

    #[error("connectivity error: {0}")]
    Connectivity(String),

    #[error("configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, FeedError>;
