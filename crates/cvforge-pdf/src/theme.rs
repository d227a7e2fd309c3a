//! Page geometry and theme configuration
//!
//! All layout computation runs off these two immutable structs. They are
//! passed into the assembler and compositor at construction time rather
//! than referenced as ambient module state, so tests can swap in alternate
//! palettes and page sizes without global mutation.

use crate::error::{PdfError, Result};

/// Output page size in PDF points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSize {
    pub width: f64,
    pub height: f64,
}

impl PageSize {
    /// A4 portrait, the fixed default for every output page
    pub const A4: PageSize = PageSize {
        width: 595.28,
        height: 841.89,
    };
}

/// An RGB color with components in 0..=1
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb {
        r: 1.0,
        g: 1.0,
        b: 1.0,
    };

    /// Parse a 6-hex-digit color string, with or without a leading '#'
    fn from_hex(name: &'static str, value: &str) -> Result<Self> {
        let hex = value.strip_prefix('#').unwrap_or(value);
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(PdfError::InvalidThemeColor {
                name,
                value: value.to_string(),
            });
        }
        let channel = |i: usize| -> f64 {
            let v = u8::from_str_radix(&hex[i..i + 2], 16).unwrap_or(0);
            f64::from(v) / 255.0
        };
        Ok(Rgb {
            r: channel(0),
            g: channel(2),
            b: channel(4),
        })
    }
}

/// Named theme colors as configured, hex-encoded
///
/// Validation happens eagerly in [`Theme::resolve`]; a malformed value is a
/// configuration defect and fails the whole assembly before any page is
/// produced.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub background: String,
    pub sidebar: String,
    pub accent: String,
    pub foreground: String,
    pub border: String,
    pub footer_text: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: "#f8fafc".to_string(),
            sidebar: "#1e293b".to_string(),
            accent: "#38bdf8".to_string(),
            foreground: "#0f172a".to_string(),
            border: "#cbd5e1".to_string(),
            footer_text: "#94a3b8".to_string(),
        }
    }
}

impl Theme {
    /// Parse every configured color, failing on the first malformed one
    pub fn resolve(&self) -> Result<ResolvedTheme> {
        Ok(ResolvedTheme {
            background: Rgb::from_hex("background", &self.background)?,
            sidebar: Rgb::from_hex("sidebar", &self.sidebar)?,
            accent: Rgb::from_hex("accent", &self.accent)?,
            foreground: Rgb::from_hex("foreground", &self.foreground)?,
            border: Rgb::from_hex("border", &self.border)?,
            footer_text: Rgb::from_hex("footer_text", &self.footer_text)?,
        })
    }
}

/// Theme colors parsed into draw-ready RGB values
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedTheme {
    pub background: Rgb,
    pub sidebar: Rgb,
    pub accent: Rgb,
    pub foreground: Rgb,
    pub border: Rgb,
    pub footer_text: Rgb,
}

/// Fixed offsets driving the certificate page layout, in points
///
/// `header_y` and `title_y` are measured down from the page top; `frame_y`
/// is the frame bottom edge measured up from the page bottom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CertPageLayout {
    /// Width of the colored column on the left edge
    pub sidebar_width: f64,
    /// Caption x offset right of the sidebar
    pub content_x_offset: f64,
    /// Issuer baseline, from page top
    pub header_y: f64,
    /// Title baseline, from page top
    pub title_y: f64,
    /// Frame left inset, right of the sidebar
    pub frame_inset_left: f64,
    /// Frame right inset, from page right edge
    pub frame_inset_right: f64,
    /// Frame bottom edge, from page bottom
    pub frame_y: f64,
    /// Subtracted from page height to get the frame height
    pub frame_bottom_inset: f64,
    /// Breathing room between frame and embedded content
    pub inner_padding: f64,
    /// Frame border stroke width
    pub border_width: f64,
    /// Footer line 1 baseline, from page bottom
    pub footer_line1_y: f64,
    /// Footer line 2 baseline, from page bottom
    pub footer_line2_y: f64,
    /// Footer font size
    pub footer_font_size: f64,
}

impl Default for CertPageLayout {
    fn default() -> Self {
        Self {
            sidebar_width: 150.0,
            content_x_offset: 24.0,
            header_y: 40.0,
            title_y: 58.0,
            frame_inset_left: 24.0,
            frame_inset_right: 24.0,
            frame_y: 40.0,
            frame_bottom_inset: 110.0,
            inner_padding: 16.0,
            border_width: 1.5,
            footer_line1_y: 34.0,
            footer_line2_y: 22.0,
            footer_font_size: 8.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme_resolves() {
        let resolved = Theme::default().resolve().unwrap();
        assert!(resolved.sidebar.r < resolved.background.r);
        assert_eq!(Rgb::from_hex("x", "#ffffff").unwrap(), Rgb::WHITE);
    }

    #[test]
    fn test_malformed_color_is_rejected() {
        let theme = Theme {
            accent: "#38bdf".to_string(),
            ..Theme::default()
        };
        match theme.resolve() {
            Err(PdfError::InvalidThemeColor { name, value }) => {
                assert_eq!(name, "accent");
                assert_eq!(value, "#38bdf");
            }
            other => panic!("expected InvalidThemeColor, got {other:?}"),
        }
    }

    #[test]
    fn test_non_hex_digits_are_rejected() {
        assert!(Rgb::from_hex("x", "#12345g").is_err());
        assert!(Rgb::from_hex("x", "not-a-color").is_err());
        assert!(Rgb::from_hex("x", "").is_err());
    }

    #[test]
    fn test_hex_without_hash_is_accepted() {
        let c = Rgb::from_hex("x", "000000").unwrap();
        assert_eq!(c.r, 0.0);
        assert_eq!(c.b, 0.0);
    }

    #[test]
    fn test_channel_scaling() {
        let c = Rgb::from_hex("x", "#ff8000").unwrap();
        assert!((c.r - 1.0).abs() < 1e-9);
        assert!((c.g - 128.0 / 255.0).abs() < 1e-9);
        assert!(c.b.abs() < 1e-9);
    }
}
