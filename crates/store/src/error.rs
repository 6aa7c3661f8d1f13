//! # Store Errors
//!
//! Error types for the snapshot store, wrapping IO and serde_json errors.

use thiserror::Error;

/// Persistence layer errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Snapshot IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Snapshot serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias with StoreError
pub type StoreResult<T> = Result<T, StoreError>;

impl StoreError {
    /// Whether this is a corrupt-snapshot (deserialization) failure
    pub fn is_corrupt(&self) -> bool {
        matches!(self, StoreError::Serialization(_))
    }

    /// Whether this is an IO failure
    pub fn is_io(&self) -> bool {
        matches!(self, StoreError::Io(_))
    }
}
