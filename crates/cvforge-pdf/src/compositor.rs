//! Certificate page composition
//!
//! Draws the fixed chrome of one certificate page (background, sidebar,
//! captions, bordered frame) and places the embedded foreign page scaled
//! and centered inside the frame. Pure function over a content-op buffer;
//! no layout state carries between calls.

use lopdf::content::Operation;
use lopdf::Object;

use crate::embed::{real, EmbeddedPage};
use crate::metrics::encode_win_ansi;
use crate::theme::{CertPageLayout, ResolvedTheme, Rgb};

/// Caption font sizes, fixed by the page design
const ISSUER_FONT_SIZE: f64 = 14.0;
const TITLE_FONT_SIZE: f64 = 11.0;

/// Resource names of the two embedded standard fonts
#[derive(Debug, Clone)]
pub struct FontHandles {
    /// Helvetica resource name
    pub regular: String,
    /// Helvetica-Bold resource name
    pub bold: String,
}

/// Page caption, with a `(i/N)` suffix for multi-page certificates
///
/// `index` is 1-based within the certificate.
pub fn caption_for_page(title: &str, index: usize, total: usize) -> String {
    if total > 1 {
        format!("{title} ({index}/{total})")
    } else {
        title.to_string()
    }
}

/// The content frame certificates are scaled into
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Compute the content frame for a page of the given size
pub fn content_frame(layout: &CertPageLayout, base_width: f64, base_height: f64) -> Frame {
    let x = layout.sidebar_width + layout.frame_inset_left;
    Frame {
        x,
        y: layout.frame_y,
        width: base_width - x - layout.frame_inset_right,
        height: base_height - layout.frame_bottom_inset,
    }
}

/// Uniform-scale fit of a foreign page into the frame, centered
///
/// Returns (x, y, width, height) of the draw region. The smaller of the
/// width-fit and height-fit scales wins, so the content fits both
/// dimensions with its aspect ratio preserved.
pub fn fit_into_frame(
    frame: &Frame,
    inner_padding: f64,
    foreign_width: f64,
    foreign_height: f64,
) -> (f64, f64, f64, f64) {
    let scale = f64::min(
        (frame.width - inner_padding) / foreign_width,
        (frame.height - inner_padding) / foreign_height,
    );
    let draw_width = foreign_width * scale;
    let draw_height = foreign_height * scale;
    let draw_x = frame.x + (frame.width - draw_width) / 2.0;
    let draw_y = frame.y + (frame.height - draw_height) / 2.0;
    (draw_x, draw_y, draw_width, draw_height)
}

/// Draws certificate pages against a fixed theme and layout
#[derive(Debug, Clone, Copy)]
pub struct Compositor<'a> {
    theme: &'a ResolvedTheme,
    layout: &'a CertPageLayout,
}

impl<'a> Compositor<'a> {
    pub fn new(theme: &'a ResolvedTheme, layout: &'a CertPageLayout) -> Self {
        Self { theme, layout }
    }

    /// Compose one certificate page onto a blank target page
    ///
    /// Emits, in order: background fill, sidebar fill, issuer and title
    /// captions, white mat with border, and the scaled foreign page.
    pub fn compose_certificate_page(
        &self,
        ops: &mut Vec<Operation>,
        page: &dyn EmbeddedPage,
        page_title: &str,
        issuer_text: &str,
        base_width: f64,
        base_height: f64,
        fonts: &FontHandles,
    ) {
        let layout = self.layout;
        let theme = self.theme;

        fill_rect(ops, theme.background, 0.0, 0.0, base_width, base_height);
        fill_rect(
            ops,
            theme.sidebar,
            0.0,
            0.0,
            layout.sidebar_width,
            base_height,
        );

        let caption_x = layout.sidebar_width + layout.content_x_offset;
        draw_text(
            ops,
            &fonts.bold,
            ISSUER_FONT_SIZE,
            theme.accent,
            caption_x,
            base_height - layout.header_y,
            issuer_text,
        );
        draw_text(
            ops,
            &fonts.regular,
            TITLE_FONT_SIZE,
            theme.foreground,
            caption_x,
            base_height - layout.title_y,
            page_title,
        );

        let frame = content_frame(layout, base_width, base_height);
        let (fw, fh) = page.intrinsic_size();
        let (draw_x, draw_y, draw_width, draw_height) =
            fit_into_frame(&frame, layout.inner_padding, fw, fh);

        // White mat behind the embedded content
        ops.push(Operation::new("q", vec![]));
        set_fill_color(ops, Rgb::WHITE);
        set_stroke_color(ops, theme.border);
        ops.push(Operation::new("w", vec![real(layout.border_width)]));
        ops.push(Operation::new(
            "re",
            vec![
                real(frame.x),
                real(frame.y),
                real(frame.width),
                real(frame.height),
            ],
        ));
        ops.push(Operation::new("B", vec![]));
        ops.push(Operation::new("Q", vec![]));

        page.draw_into(ops, draw_x, draw_y, draw_width, draw_height);

        log::debug!(
            "composed certificate page '{}' at {:.1}x{:.1} scale region ({:.1}, {:.1})",
            page_title,
            draw_width,
            draw_height,
            draw_x,
            draw_y
        );
    }
}

fn set_fill_color(ops: &mut Vec<Operation>, color: Rgb) {
    ops.push(Operation::new(
        "rg",
        vec![real(color.r), real(color.g), real(color.b)],
    ));
}

fn set_stroke_color(ops: &mut Vec<Operation>, color: Rgb) {
    ops.push(Operation::new(
        "RG",
        vec![real(color.r), real(color.g), real(color.b)],
    ));
}

pub(crate) fn fill_rect(
    ops: &mut Vec<Operation>,
    color: Rgb,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
) {
    ops.push(Operation::new("q", vec![]));
    set_fill_color(ops, color);
    ops.push(Operation::new(
        "re",
        vec![real(x), real(y), real(width), real(height)],
    ));
    ops.push(Operation::new("f", vec![]));
    ops.push(Operation::new("Q", vec![]));
}

pub(crate) fn draw_text(
    ops: &mut Vec<Operation>,
    font: &str,
    size: f64,
    color: Rgb,
    x: f64,
    y: f64,
    text: &str,
) {
    ops.push(Operation::new("BT", vec![]));
    ops.push(Operation::new(
        "Tf",
        vec![Object::Name(font.as_bytes().to_vec()), real(size)],
    ));
    set_fill_color(ops, color);
    ops.push(Operation::new("Td", vec![real(x), real(y)]));
    ops.push(Operation::new(
        "Tj",
        vec![Object::String(
            encode_win_ansi(text),
            lopdf::StringFormat::Literal,
        )],
    ));
    ops.push(Operation::new("ET", vec![]));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;

    struct FakePage {
        width: f64,
        height: f64,
    }

    impl EmbeddedPage for FakePage {
        fn intrinsic_size(&self) -> (f64, f64) {
            (self.width, self.height)
        }

        fn draw_into(&self, ops: &mut Vec<Operation>, _x: f64, _y: f64, _w: f64, _h: f64) {
            ops.push(Operation::new("Do", vec![Object::Name(b"Fake".to_vec())]));
        }
    }

    fn layout() -> CertPageLayout {
        CertPageLayout::default()
    }

    #[test]
    fn test_caption_suffix_rule() {
        assert_eq!(caption_for_page("Security+", 1, 1), "Security+");
        assert_eq!(caption_for_page("Security+", 1, 3), "Security+ (1/3)");
        assert_eq!(caption_for_page("Security+", 2, 3), "Security+ (2/3)");
        assert_eq!(caption_for_page("Security+", 3, 3), "Security+ (3/3)");
    }

    #[test]
    fn test_fit_preserves_aspect_and_bounds() {
        let layout = layout();
        let frame = content_frame(&layout, 595.28, 841.89);
        for &(fw, fh) in &[
            (612.0, 792.0),
            (100.0, 900.0),
            (2000.0, 120.0),
            (50.0, 50.0),
        ] {
            let (_, _, dw, dh) = fit_into_frame(&frame, layout.inner_padding, fw, fh);
            assert!(dw <= frame.width - layout.inner_padding + 1e-9);
            assert!(dh <= frame.height - layout.inner_padding + 1e-9);
            assert!((dw / dh - fw / fh).abs() < 1e-9, "aspect drifted for {fw}x{fh}");
        }
    }

    #[test]
    fn test_fit_is_centered() {
        let layout = layout();
        let frame = content_frame(&layout, 595.28, 841.89);
        let (dx, dy, dw, dh) = fit_into_frame(&frame, layout.inner_padding, 612.0, 792.0);
        assert!((dx + dw / 2.0 - (frame.x + frame.width / 2.0)).abs() < 1e-9);
        assert!((dy + dh / 2.0 - (frame.y + frame.height / 2.0)).abs() < 1e-9);
    }

    #[test]
    fn test_frame_geometry() {
        let layout = layout();
        let frame = content_frame(&layout, 595.28, 841.89);
        assert_eq!(frame.x, layout.sidebar_width + layout.frame_inset_left);
        assert_eq!(frame.y, layout.frame_y);
        assert!(
            (frame.width - (595.28 - frame.x - layout.frame_inset_right)).abs() < 1e-9
        );
        assert!((frame.height - (841.89 - layout.frame_bottom_inset)).abs() < 1e-9);
    }

    #[test]
    fn test_compose_emits_foreign_draw_last() {
        let theme = Theme::default().resolve().unwrap();
        let layout = layout();
        let compositor = Compositor::new(&theme, &layout);
        let fonts = FontHandles {
            regular: "F1".to_string(),
            bold: "F2".to_string(),
        };
        let mut ops = Vec::new();
        let page = FakePage {
            width: 612.0,
            height: 792.0,
        };
        compositor.compose_certificate_page(
            &mut ops,
            &page,
            "Security+ (1/3)",
            "CompTIA",
            595.28,
            841.89,
            &fonts,
        );
        // Foreign page drawn after all chrome
        let last = ops.last().unwrap();
        assert_eq!(last.operator, "Do");
        // Deterministic: same inputs, same ops
        let mut again = Vec::new();
        compositor.compose_certificate_page(
            &mut again,
            &page,
            "Security+ (1/3)",
            "CompTIA",
            595.28,
            841.89,
            &fonts,
        );
        assert_eq!(ops.len(), again.len());
    }

    #[test]
    fn test_compose_includes_both_captions() {
        let theme = Theme::default().resolve().unwrap();
        let layout = layout();
        let compositor = Compositor::new(&theme, &layout);
        let fonts = FontHandles {
            regular: "F1".to_string(),
            bold: "F2".to_string(),
        };
        let mut ops = Vec::new();
        let page = FakePage {
            width: 300.0,
            height: 300.0,
        };
        compositor.compose_certificate_page(
            &mut ops,
            &page,
            "Title",
            "Issuer",
            595.28,
            841.89,
            &fonts,
        );
        let texts: Vec<_> = ops
            .iter()
            .filter(|op| op.operator == "Tj")
            .collect();
        assert_eq!(texts.len(), 2);
    }
}
