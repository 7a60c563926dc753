//! Error types for jobscan-rs

use thiserror::Error;

/// Result type alias for scanner operations
pub type Result<T> = std::result::Result<T, ScanError>;

/// Scanner error types
///
/// Network failures during verification are not represented here: the probe
/// collapses them into negative verification outcomes.
#[derive(Error, Debug)]
pub enum ScanError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// The request cannot be assessed as given
    #[error("Cannot assess: {0}")]
    InvalidInput(String),

    /// HTTP client construction error
    #[error("HTTP client error: {0}")]
    Http(String),
}
