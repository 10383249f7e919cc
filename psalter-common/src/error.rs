//! Common error types for the psalter services

use thiserror::Error;

/// Common result type for psalter operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across the psalter services
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parse error (wraps serde_json::Error)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Upstream data violates the compact-encoding contract
    #[error("Decode error: {0}")]
    Decode(String),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Requested resource not found
    #[error("Not found: {0}")]
    NotFound(String),
}
