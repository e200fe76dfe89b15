//! Craftmatch Error Types
//!
//! Centralized error handling for the I/O edges of the crate. The matching
//! core itself is total and never returns these.

use thiserror::Error;

/// Central error type for Craftmatch
#[derive(Error, Debug)]
pub enum CraftError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Lock poisoned: {0}")]
    Lock(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for Craftmatch operations
pub type CraftResult<T> = Result<T, CraftError>;

/// Helper to convert Mutex poison errors
impl<T> From<std::sync::PoisonError<T>> for CraftError {
    fn from(err: std::sync::PoisonError<T>) -> Self {
        CraftError::Lock(err.to_string())
    }
}
