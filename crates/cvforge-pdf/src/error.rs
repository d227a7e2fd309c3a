//! Error types for PDF assembly

use thiserror::Error;

/// Result type for PDF operations
pub type Result<T> = std::result::Result<T, PdfError>;

/// Errors that can occur while assembling the merged CV document
#[derive(Error, Debug)]
pub enum PdfError {
    /// A required input file (base PDF, certificate PDF) could not be read
    #[error("Missing source file '{path}'{}", title_suffix(.title))]
    MissingSourceFile {
        /// Path that failed to resolve
        path: String,
        /// Human-readable certificate title, when the file is a certificate
        title: Option<String>,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// An input file was read but is not a loadable PDF
    #[error("Unreadable PDF '{path}'{}: {source}", title_suffix(.title))]
    InvalidSourceFile {
        /// Path of the unparseable file
        path: String,
        /// Human-readable certificate title, when the file is a certificate
        title: Option<String>,
        /// Underlying parse error
        #[source]
        source: lopdf::Error,
    },

    /// A configured theme color is not a well-formed 6-hex-digit color
    #[error("Invalid theme color '{name}': {value:?}")]
    InvalidThemeColor {
        /// Theme slot name, e.g. "sidebar"
        name: &'static str,
        /// The offending value
        value: String,
    },

    /// The PDF container rejected a load or save operation
    #[error("PDF serialization failed: {0}")]
    Serialization(#[from] lopdf::Error),

    /// IO error while writing output
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn title_suffix(title: &Option<String>) -> String {
    match title {
        Some(t) => format!(" for certificate '{t}'"),
        None => String::new(),
    }
}
