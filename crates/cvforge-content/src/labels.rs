//! Locale-dependent footer labels
//!
//! The running footer on every merged page shows a page counter and a
//! "last updated" line. All strings, including the formatted month+year
//! date, are resolved once per generation run from an injected reference
//! date so that output stays deterministic for a given input.

use chrono::{Datelike, NaiveDate};

use crate::locale::Locale;

const MONTHS_EN: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const MONTHS_DE: [&str; 12] = [
    "Januar",
    "Februar",
    "M\u{e4}rz",
    "April",
    "Mai",
    "Juni",
    "Juli",
    "August",
    "September",
    "Oktober",
    "November",
    "Dezember",
];

/// Resolved footer strings for one locale and reference date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterLabels {
    /// "Page" / "Seite"
    pub page_label: String,
    /// "of" / "von"
    pub of_label: String,
    /// "Last updated" / "Letztes Update"
    pub update_label: String,
    /// Locale-formatted month + year, e.g. "February 2026" / "Februar 2026"
    pub date_label: String,
}

impl FooterLabels {
    /// Resolve labels for a locale and a reference date
    ///
    /// The date is injected by the caller rather than read from the system
    /// clock, so the same inputs always produce the same footer text.
    pub fn for_locale(locale: Locale, reference_date: NaiveDate) -> Self {
        let month_index = reference_date.month0() as usize;
        let year = reference_date.year();
        match locale {
            Locale::En => Self {
                page_label: "Page".to_string(),
                of_label: "of".to_string(),
                update_label: "Last updated".to_string(),
                date_label: format!("{} {}", MONTHS_EN[month_index], year),
            },
            Locale::De => Self {
                page_label: "Seite".to_string(),
                of_label: "von".to_string(),
                update_label: "Letztes Update".to_string(),
                date_label: format!("{} {}", MONTHS_DE[month_index], year),
            },
        }
    }

    /// First footer line: "Page i of N"
    pub fn page_line(&self, page: usize, total: usize) -> String {
        format!("{} {} {} {}", self.page_label, page, self.of_label, total)
    }

    /// Second footer line: "Last updated: Month Year"
    pub fn update_line(&self) -> String {
        format!("{}: {}", self.update_label, self.date_label)
    }
}
