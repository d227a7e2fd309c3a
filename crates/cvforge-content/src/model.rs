//! Resume content structures
//!
//! The structured data behind the generated documents: profile, work
//! experience, skills, contact details, and the certificate attachments
//! merged into the long PDF variant. Pure data, no behavior beyond
//! construction and locale selection.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::locale::LocalizedText;

/// Name, title line, and about text of the person
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Full name, locale-independent
    pub name: String,
    /// Professional title line under the name
    pub title: LocalizedText,
    /// About/summary paragraphs
    pub about: Vec<LocalizedText>,
}

/// One bullet of an experience description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DescriptionItem {
    /// Marked achievements get emphasized rendering
    #[serde(default)]
    pub achievement: bool,
    /// Bullet text
    pub text: LocalizedText,
}

/// One position in the work history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    /// Role title
    pub title: LocalizedText,
    /// Employer or client, locale-independent
    pub company: String,
    /// Human-readable period, e.g. "2019 - 2023"
    pub period: LocalizedText,
    /// Work location
    pub location: LocalizedText,
    /// Description bullets
    pub description: Vec<DescriptionItem>,
    /// Technology/topic tags
    #[serde(default)]
    pub tags: Vec<LocalizedText>,
}

/// Skill grouping used for the skills line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Security,
    Infrastructure,
    Tools,
    Ai,
    Management,
    Languages,
    Compliance,
}

/// A single named skill
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    /// Skill name
    pub name: LocalizedText,
    /// Grouping category
    pub category: SkillCategory,
}

/// Contact details for the resume header
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    /// Email address used on the CV
    pub email: String,
    /// Phone number
    pub phone: String,
    /// Personal homepage URL
    #[serde(default)]
    pub homepage: Option<String>,
}

/// One externally stored certificate PDF to merge into the output
///
/// `file_path` is root-relative; a leading `/` is stripped before joining to
/// the public-assets directory. The file is read at assembly time and never
/// mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CertificateDocument {
    /// Certificate title shown in the page caption
    pub title: LocalizedText,
    /// Issuing organization shown above the title
    pub issuer: LocalizedText,
    /// Root-relative path to the PDF file
    pub file_path: String,
}

impl CertificateDocument {
    /// Resolve the certificate file against the public-assets root
    pub fn resolve_path(&self, assets_root: &Path) -> std::path::PathBuf {
        assets_root.join(self.file_path.trim_start_matches('/'))
    }
}

/// The complete static content behind the generated documents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteContent {
    pub profile: Profile,
    pub contact: ContactInfo,
    pub experience: Vec<Experience>,
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub certificates: Vec<CertificateDocument>,
}

impl SiteContent {
    /// Load the content model from JSON bytes
    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Load the content model from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        Self::from_json(&bytes)
    }

    /// A small bilingual fixture used by tests and documentation
    pub fn sample() -> Self {
        Self {
            profile: Profile {
                name: "Christian Erben".to_string(),
                title: LocalizedText::new(
                    "IT Security & Infrastructure Consultant",
                    "IT-Sicherheits- und Infrastruktur-Berater",
                ),
                about: vec![LocalizedText::new(
                    "Consultant with a focus on security architecture and automation.",
                    "Berater mit Schwerpunkt Sicherheitsarchitektur und Automatisierung.",
                )],
            },
            contact: ContactInfo {
                email: "cv@example.com".to_string(),
                phone: "+49 170 0000000".to_string(),
                homepage: Some("https://example.com".to_string()),
            },
            experience: vec![Experience {
                title: LocalizedText::new("Security Consultant", "Sicherheitsberater"),
                company: "Acme GmbH".to_string(),
                period: LocalizedText::new("2019 - 2023", "2019 - 2023"),
                location: LocalizedText::new("Munich, Germany", "M\u{fc}nchen, Deutschland"),
                description: vec![
                    DescriptionItem {
                        achievement: false,
                        text: LocalizedText::new(
                            "Designed zero-trust network segmentation.",
                            "Zero-Trust-Netzwerksegmentierung entworfen.",
                        ),
                    },
                    DescriptionItem {
                        achievement: true,
                        text: LocalizedText::new(
                            "Cut incident response time by 40%.",
                            "Reaktionszeit bei Vorf\u{e4}llen um 40% gesenkt.",
                        ),
                    },
                ],
                tags: vec![LocalizedText::new("Security", "Sicherheit")],
            }],
            skills: vec![
                Skill {
                    name: LocalizedText::new("Network Security", "Netzwerksicherheit"),
                    category: SkillCategory::Security,
                },
                Skill {
                    name: LocalizedText::new("Python", "Python"),
                    category: SkillCategory::Tools,
                },
            ],
            certificates: vec![CertificateDocument {
                title: LocalizedText::new("Security+", "Security+"),
                issuer: LocalizedText::new("CompTIA", "CompTIA"),
                file_path: "/certificates/security-plus.pdf".to_string(),
            }],
        }
    }
}
