//! Locale codes and localized text pairs
//!
//! Every user-visible string in the content model exists in both supported
//! locales. Consumers pick one variant by active locale at render time;
//! the pair itself is never mutated after construction.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ContentError;

/// A supported output locale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English
    En,
    /// German
    De,
}

impl Locale {
    /// The fixed locale set iterated by the generation driver
    pub const ALL: [Locale; 2] = [Locale::En, Locale::De];

    /// Two-letter locale code
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::De => "de",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Locale::En),
            "de" => Ok(Locale::De),
            other => Err(ContentError::UnknownLocale(other.to_string())),
        }
    }
}

/// A pair of strings keyed by locale, both variants always present
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    /// English variant
    pub en: String,
    /// German variant
    pub de: String,
}

impl LocalizedText {
    /// Create a localized pair from both variants
    pub fn new(en: impl Into<String>, de: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            de: de.into(),
        }
    }

    /// Select the variant for the given locale
    pub fn get(&self, locale: Locale) -> &str {
        match locale {
            Locale::En => &self.en,
            Locale::De => &self.de,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_codes() {
        assert_eq!(Locale::En.as_str(), "en");
        assert_eq!(Locale::De.as_str(), "de");
        assert_eq!("de".parse::<Locale>().unwrap(), Locale::De);
        assert!("fr".parse::<Locale>().is_err());
    }

    #[test]
    fn test_localized_text_selection() {
        let text = LocalizedText::new("Experience", "Berufserfahrung");
        assert_eq!(text.get(Locale::En), "Experience");
        assert_eq!(text.get(Locale::De), "Berufserfahrung");
    }

    #[test]
    fn test_locale_set_is_stable() {
        let codes: Vec<_> = Locale::ALL.iter().map(|l| l.as_str()).collect();
        assert_eq!(codes, vec!["en", "de"]);
    }
}
