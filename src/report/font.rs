//! Standard Type1 font metrics and WinAnsi text encoding.
//!
//! The report uses the base-14 Helvetica family, which every PDF viewer
//! provides, so no font program is embedded. Widths come from the Adobe AFM
//! files and are expressed in thousandths of the font size.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontStyle {
    Regular,
    Bold,
}

impl FontStyle {
    pub fn base_font(self) -> &'static str {
        match self {
            Self::Regular => "Helvetica",
            Self::Bold => "Helvetica-Bold",
        }
    }

    /// Resource name the content streams refer to.
    pub fn resource_name(self) -> &'static str {
        match self {
            Self::Regular => "F1",
            Self::Bold => "F2",
        }
    }
}

const FALLBACK_WIDTH: u16 = 556;

// Codes 32..=126.
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, //
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, //
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, //
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, //
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, //
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278, //
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611, //
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778, //
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556, //
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611, //
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

fn char_width(ch: char, style: FontStyle) -> u16 {
    let table = match style {
        FontStyle::Regular => &HELVETICA_WIDTHS,
        FontStyle::Bold => &HELVETICA_BOLD_WIDTHS,
    };

    match ch as u32 {
        code @ 32..=126 => table[(code - 32) as usize],
        _ => FALLBACK_WIDTH,
    }
}

/// Width of `text` in points when set at `size`.
pub fn text_width(text: &str, size: f32, style: FontStyle) -> f32 {
    let units: u32 = text.chars().map(|ch| u32::from(char_width(ch, style))).sum();
    units as f32 * size / 1000.0
}

/// Encode text for a simple font using WinAnsiEncoding.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|ch| match ch {
            '\t' | '\n' | '\r' => b' ',
            ' '..='~' => ch as u8,
            '\u{A0}'..='\u{FF}' => ch as u32 as u8,
            '€' => 0x80,
            '…' => 0x85,
            '‘' => 0x91,
            '’' => 0x92,
            '“' => 0x93,
            '”' => 0x94,
            '•' => 0x95,
            '–' => 0x96,
            '—' => 0x97,
            '™' => 0x99,
            _ => b'?',
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_width_scales_with_size() {
        let ten = text_width("Laptop", 10.0, FontStyle::Regular);
        let twenty = text_width("Laptop", 20.0, FontStyle::Regular);
        assert!((twenty - ten * 2.0).abs() < 0.001);
    }

    #[test]
    fn test_bold_is_wider() {
        let regular = text_width("Created Date", 10.0, FontStyle::Regular);
        let bold = text_width("Created Date", 10.0, FontStyle::Bold);
        assert!(bold > regular);
    }

    #[test]
    fn test_digit_width() {
        // Every digit is 556 units wide.
        assert!((text_width("0123456789", 1.0, FontStyle::Regular) - 5.56).abs() < 0.001);
    }

    #[test]
    fn test_encode_win_ansi() {
        assert_eq!(encode_win_ansi("$99.99"), b"$99.99".to_vec());
        assert_eq!(encode_win_ansi("Curaçao"), vec![b'C', b'u', b'r', b'a', 0xE7, b'a', b'o']);
        assert_eq!(encode_win_ansi("€"), vec![0x80]);
        assert_eq!(encode_win_ansi("東京"), b"??".to_vec());
        assert_eq!(encode_win_ansi("a\tb"), b"a b".to_vec());
    }
}
