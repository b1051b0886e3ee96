//! Error types for the keyed store.

use std::path::PathBuf;

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors that can occur during store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// I/O operation failed (includes quota-style write failures)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The backing document could not be parsed or serialized
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The backing document exists but does not hold a flat string map
    #[error("Malformed store document: {path:?} - {reason}")]
    MalformedDocument { path: PathBuf, reason: String },
}
