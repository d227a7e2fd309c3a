//! DOCX resume serialization
//!
//! Builds a Word-compatible resume package directly, without a template:
//! ZIP container handling, a relationship registry, and a string-buffer
//! document writer. Shares the content model with the PDF pipeline but no
//! layout code; the DOCX is a structurally separate serialization.

pub mod archive;
pub mod error;
pub mod relationships;
pub mod writer;

pub use archive::DocxArchive;
pub use error::{DocxError, Result};
pub use relationships::Relationships;
pub use writer::generate_docx;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
