//! Error types for content model loading

use thiserror::Error;

/// Result type for content operations
pub type Result<T> = std::result::Result<T, ContentError>;

/// Errors that can occur while loading the content model
#[derive(Error, Debug)]
pub enum ContentError {
    /// Content JSON could not be parsed
    #[error("Content JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error while reading a content file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A locale code outside the supported set
    #[error("Unknown locale: {0}")]
    UnknownLocale(String),
}
