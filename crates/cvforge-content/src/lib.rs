//! cvforge-content - Bilingual content model for CV generation
//!
//! This crate provides the data structures describing the resume content
//! (profile, experience, skills, certificates) in both supported locales,
//! plus the locale-dependent footer labels used by the document assemblers.
//!
//! # Example
//!
//! ```
//! use cvforge_content::{Locale, SiteContent};
//!
//! let content = SiteContent::sample();
//! assert_eq!(content.profile.name, "Christian Erben");
//! assert!(!content.certificates.is_empty());
//! assert_ne!(
//!     content.profile.title.get(Locale::En),
//!     content.profile.title.get(Locale::De),
//! );
//! ```

pub mod error;
pub mod labels;
pub mod locale;
pub mod model;

pub use error::{ContentError, Result};
pub use labels::FooterLabels;
pub use locale::{Locale, LocalizedText};
pub use model::{
    CertificateDocument, ContactInfo, DescriptionItem, Experience, Profile, SiteContent, Skill,
    SkillCategory,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
