//! Error types for Sigil

use thiserror::Error;

/// Result type for Sigil operations
pub type Result<T> = std::result::Result<T, SigilError>;

/// Sigil error types
#[derive(Error, Debug)]
pub enum SigilError {
    #[error("Field '{0}' has not been initialized")]
    UninitializedField(&'static str),

    #[error("Field '{0}' may only be initialized once")]
    AlreadyInitialized(&'static str),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
