//! Standard-font text metrics and encoding
//!
//! Caption and footer text is set in the non-subset standard fonts
//! Helvetica and Helvetica-Bold, so advance widths are the fixed AFM
//! values (units of 1/1000 em). The footer stamper measures strings with
//! these tables to center them inside the sidebar column.
//!
//! Content-stream strings use WinAnsi encoding; characters outside that
//! set degrade to '?'. German resume text only needs the Latin-1 range,
//! which WinAnsi covers.

/// One of the two embedded standard fonts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StandardFont {
    Helvetica,
    HelveticaBold,
}

impl StandardFont {
    /// PostScript base font name for the font dictionary
    pub fn base_name(&self) -> &'static str {
        match self {
            StandardFont::Helvetica => "Helvetica",
            StandardFont::HelveticaBold => "Helvetica-Bold",
        }
    }

    /// Rendered width of `text` at `size` points
    pub fn text_width(&self, text: &str, size: f64) -> f64 {
        let units: f64 = text.chars().map(|c| self.char_width(c)).sum();
        units * size / 1000.0
    }

    /// Advance width of one character in 1/1000 em
    pub fn char_width(&self, ch: char) -> f64 {
        let idx = ch as u32;
        if (0x20..=0x7e).contains(&idx) {
            return match self {
                StandardFont::Helvetica => HELVETICA_ASCII[(idx - 0x20) as usize],
                StandardFont::HelveticaBold => HELVETICA_BOLD_ASCII[(idx - 0x20) as usize],
            };
        }
        match (self, ch) {
            (StandardFont::Helvetica, '\u{e4}') => 556.0, // ä
            (StandardFont::Helvetica, '\u{f6}') => 556.0, // ö
            (StandardFont::Helvetica, '\u{fc}') => 556.0, // ü
            (StandardFont::Helvetica, '\u{c4}') => 667.0, // Ä
            (StandardFont::Helvetica, '\u{d6}') => 778.0, // Ö
            (StandardFont::Helvetica, '\u{dc}') => 722.0, // Ü
            (StandardFont::Helvetica, '\u{df}') => 611.0, // ß
            (StandardFont::HelveticaBold, '\u{e4}') => 556.0,
            (StandardFont::HelveticaBold, '\u{f6}') => 611.0,
            (StandardFont::HelveticaBold, '\u{fc}') => 611.0,
            (StandardFont::HelveticaBold, '\u{c4}') => 722.0,
            (StandardFont::HelveticaBold, '\u{d6}') => 778.0,
            (StandardFont::HelveticaBold, '\u{dc}') => 722.0,
            (StandardFont::HelveticaBold, '\u{df}') => 611.0,
            // Default for unmapped characters
            _ => 500.0,
        }
    }
}

/// Encode text for a WinAnsi content-stream string
///
/// ASCII and the Latin-1 upper range pass through; a handful of WinAnsi
/// specials get their codepage positions; everything else becomes '?'.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c as u32 {
            0x20..=0x7e => c as u8,
            0xa0..=0xff => c as u8,
            _ => match c {
                '\u{20ac}' => 0x80, // €
                '\u{2018}' => 0x91,
                '\u{2019}' => 0x92,
                '\u{201c}' => 0x93,
                '\u{201d}' => 0x94,
                '\u{2013}' => 0x96, // en dash
                '\u{2014}' => 0x97, // em dash
                _ => b'?',
            },
        })
        .collect()
}

/// Helvetica AFM advance widths for ASCII 0x20..=0x7e
const HELVETICA_ASCII: [f64; 95] = [
    278.0, 278.0, 355.0, 556.0, 556.0, 889.0, 667.0, 222.0, 333.0, 333.0, // sp ! " # $ % & ' ( )
    389.0, 584.0, 278.0, 333.0, 278.0, 278.0, 556.0, 556.0, 556.0, 556.0, // * + , - . / 0 1 2 3
    556.0, 556.0, 556.0, 556.0, 556.0, 556.0, 278.0, 278.0, 584.0, 584.0, // 4 5 6 7 8 9 : ; < =
    584.0, 556.0, 1015.0, 667.0, 667.0, 722.0, 722.0, 667.0, 611.0, 778.0, // > ? @ A B C D E F G
    722.0, 278.0, 500.0, 667.0, 556.0, 833.0, 722.0, 778.0, 667.0, 778.0, // H I J K L M N O P Q
    722.0, 667.0, 611.0, 722.0, 667.0, 944.0, 667.0, 667.0, 611.0, 278.0, // R S T U V W X Y Z [
    278.0, 278.0, 469.0, 556.0, 333.0, 556.0, 556.0, 500.0, 556.0, 556.0, // \ ] ^ _ ` a b c d e
    278.0, 556.0, 556.0, 222.0, 222.0, 500.0, 222.0, 833.0, 556.0, 556.0, // f g h i j k l m n o
    556.0, 556.0, 333.0, 500.0, 278.0, 556.0, 500.0, 722.0, 500.0, 500.0, // p q r s t u v w x y
    500.0, 334.0, 260.0, 334.0, 584.0, // z { | } ~
];

/// Helvetica-Bold AFM advance widths for ASCII 0x20..=0x7e
const HELVETICA_BOLD_ASCII: [f64; 95] = [
    278.0, 333.0, 474.0, 556.0, 556.0, 889.0, 722.0, 278.0, 333.0, 333.0, //
    389.0, 584.0, 278.0, 333.0, 278.0, 278.0, 556.0, 556.0, 556.0, 556.0, //
    556.0, 556.0, 556.0, 556.0, 556.0, 556.0, 333.0, 333.0, 584.0, 584.0, //
    584.0, 611.0, 975.0, 722.0, 722.0, 722.0, 722.0, 667.0, 611.0, 778.0, //
    722.0, 278.0, 556.0, 722.0, 611.0, 833.0, 722.0, 778.0, 667.0, 778.0, //
    722.0, 667.0, 611.0, 722.0, 667.0, 944.0, 667.0, 667.0, 611.0, 333.0, //
    278.0, 333.0, 584.0, 556.0, 333.0, 556.0, 611.0, 556.0, 611.0, 556.0, //
    333.0, 611.0, 611.0, 278.0, 278.0, 556.0, 278.0, 889.0, 611.0, 611.0, //
    611.0, 611.0, 389.0, 556.0, 333.0, 611.0, 556.0, 778.0, 556.0, 556.0, //
    500.0, 389.0, 280.0, 389.0, 584.0, //
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_widths() {
        assert_eq!(StandardFont::Helvetica.char_width(' '), 278.0);
        assert_eq!(StandardFont::Helvetica.char_width('W'), 944.0);
        assert_eq!(StandardFont::Helvetica.char_width('i'), 222.0);
        assert_eq!(StandardFont::HelveticaBold.char_width('i'), 278.0);
    }

    #[test]
    fn test_text_width_scales_with_size() {
        let font = StandardFont::Helvetica;
        let at8 = font.text_width("Page 1 of 6", 8.0);
        let at16 = font.text_width("Page 1 of 6", 16.0);
        assert!((at16 - 2.0 * at8).abs() < 1e-9);
    }

    #[test]
    fn test_bold_is_at_least_as_wide() {
        let text = "Page 3 of 12";
        let regular = StandardFont::Helvetica.text_width(text, 8.0);
        let bold = StandardFont::HelveticaBold.text_width(text, 8.0);
        assert!(bold >= regular);
    }

    #[test]
    fn test_win_ansi_encoding() {
        assert_eq!(encode_win_ansi("Page 1"), b"Page 1".to_vec());
        assert_eq!(encode_win_ansi("M\u{e4}rz"), vec![b'M', 0xe4, b'r', b'z']);
        assert_eq!(encode_win_ansi("\u{2013}"), vec![0x96]);
        assert_eq!(encode_win_ansi("\u{4e2d}"), vec![b'?']);
    }

    #[test]
    fn test_umlaut_widths_present() {
        assert_eq!(StandardFont::Helvetica.char_width('\u{fc}'), 556.0);
        assert_eq!(StandardFont::HelveticaBold.char_width('\u{df}'), 611.0);
    }
}
