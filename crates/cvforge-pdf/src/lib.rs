//! cvforge-pdf - Certificate merging and page composition
//!
//! This crate takes the pre-rendered base resume PDF and the certificate
//! attachments from the content model and assembles the long CV variant:
//! every certificate page is embedded into a newly created, styled output
//! page (background, sidebar, captions, bordered frame, scaled content),
//! and a running footer is stamped onto every page of the final document.
//!
//! # Example
//!
//! ```no_run
//! use chrono::NaiveDate;
//! use cvforge_content::{Locale, SiteContent};
//! use cvforge_pdf::PdfAssembler;
//!
//! let content = SiteContent::sample();
//! let base = std::fs::read("public/cv/base_en.pdf")?;
//! let assembler = PdfAssembler::with_defaults()?;
//! let merged = assembler.assemble(
//!     &base,
//!     &content.certificates,
//!     Locale::En,
//!     "public".as_ref(),
//!     NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(),
//! )?;
//! std::fs::write("public/cv/cv_en_with_certificates.pdf", merged)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod assembler;
pub mod compositor;
pub mod embed;
pub mod error;
pub mod footer;
pub mod metrics;
pub mod theme;

pub use assembler::PdfAssembler;
pub use compositor::{caption_for_page, Compositor, FontHandles};
pub use embed::{EmbeddedPage, FormXObject};
pub use error::{PdfError, Result};
pub use metrics::StandardFont;
pub use theme::{CertPageLayout, PageSize, ResolvedTheme, Rgb, Theme};
