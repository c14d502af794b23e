//! # Store Errors
//!
//! Error types for document store backends.

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Document store errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// Failure reported by the backing service, message passed through
    #[error("{0}")]
    Backend(String),

    /// Shared state was left unusable by a panicked writer
    #[error("Document store lock poisoned.")]
    Poisoned,
}

impl StoreError {
    /// Backend failure with a human-readable message
    pub fn backend(msg: impl Into<String>) -> Self {
        StoreError::Backend(msg.into())
    }
}
