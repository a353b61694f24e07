//! Glyph widths of the two standard Helvetica faces and the Latin-1 text
//! encoding used with them.

/// Advance widths (1/1000 em) for ASCII 32..=126.
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '../
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // 0..?
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // @..O
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // P.._
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // `..o
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, // p..~
];

const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

/// Width used for anything outside printable ASCII.
const FALLBACK_WIDTH: u16 = 556;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontStyle {
    Regular,
    Bold,
}

impl FontStyle {
    /// Resource name on every page.
    pub fn resource(&self) -> &'static [u8] {
        match self {
            FontStyle::Regular => b"F1",
            FontStyle::Bold => b"F2",
        }
    }

    pub fn base_font(&self) -> &'static [u8] {
        match self {
            FontStyle::Regular => b"Helvetica",
            FontStyle::Bold => b"Helvetica-Bold",
        }
    }

    fn table(&self) -> &'static [u16; 95] {
        match self {
            FontStyle::Regular => &HELVETICA,
            FontStyle::Bold => &HELVETICA_BOLD,
        }
    }
}

/// Width of `text` in points at `size` points.
pub fn text_width_pt(text: &str, style: FontStyle, size: f32) -> f32 {
    let table = style.table();
    let units: u32 = text
        .chars()
        .map(|c| {
            let code = c as u32;
            if (32..=126).contains(&code) {
                table[(code - 32) as usize] as u32
            } else {
                FALLBACK_WIDTH as u32
            }
        })
        .sum();
    units as f32 * size / 1000.0
}

/// Latin-1 bytes for a WinAnsi-encoded standard font. Characters the font
/// cannot show become `?`, control characters become spaces.
pub fn encode_latin1(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c as u32 {
            0..=0x1F | 0x7F => b' ',
            code @ (0x20..=0x7E | 0xA0..=0xFF) => code as u8,
            _ => b'?',
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widths_scale_with_size() {
        // "Hi" = H(722) + i(222)
        assert!((text_width_pt("Hi", FontStyle::Regular, 10.0) - 9.44).abs() < 1e-4);
        assert!(
            text_width_pt("Hi", FontStyle::Bold, 10.0)
                > text_width_pt("Hi", FontStyle::Regular, 10.0)
        );
        assert_eq!(text_width_pt("", FontStyle::Regular, 10.0), 0.0);
    }

    #[test]
    fn non_latin1_degrades_to_question_mark() {
        assert_eq!(encode_latin1("Café"), b"Caf\xe9".to_vec());
        assert_eq!(encode_latin1("പാലക്കാട്"), vec![b'?'; 9]);
        assert_eq!(encode_latin1("a\tb"), b"a b".to_vec());
    }
}
