//! Error types for DOCX generation

use thiserror::Error;

/// Errors that can occur while building or reading a DOCX package
#[derive(Error, Debug)]
pub enum DocxError {
    /// Error reading or writing the ZIP container
    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// Error reading or writing files
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing XML content
    #[error("XML parsing error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Required package part not found
    #[error("Required package part not found: {0}")]
    MissingPart(String),
}

/// Result type for DOCX operations
pub type Result<T> = std::result::Result<T, DocxError>;
