//! Error types for booktrack
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using BookError
pub type Result<T> = std::result::Result<T, BookError>;

/// Unified error type for booktrack operations
#[derive(Debug, Error)]
pub enum BookError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Storage Errors
    // -------------------------------------------------------------------------
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Book not found: {0}")]
    NotFound(i64),

    #[error("Stored collection is corrupted: {0}")]
    Corrupted(String),

    // -------------------------------------------------------------------------
    // Serialization Errors
    // -------------------------------------------------------------------------
    #[error("Serialization error: {0}")]
    Serialization(String),

    // -------------------------------------------------------------------------
    // Input Errors
    // -------------------------------------------------------------------------
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for BookError {
    fn from(err: serde_json::Error) -> Self {
        BookError::Serialization(err.to_string())
    }
}
