//! Font metrics for the layout engine.
//!
//! Text is measured with the advance widths of the standard PDF base-14
//! Helvetica faces, taken from their AFM files. The oblique faces share the
//! widths of their upright counterparts.

use leafprint_types::FontStyle;

/// Measures text in PDF points.
pub trait FontMetrics: Send + Sync {
    /// Advance width of one character in thousandths of an em.
    fn char_width(&self, ch: char, style: FontStyle) -> u16;

    /// Advance width of `text` set at `size` points.
    fn text_width(&self, text: &str, style: FontStyle, size: f32) -> f32 {
        let units: u32 = text.chars().map(|c| u32::from(self.char_width(c, style))).sum();
        units as f32 * size / 1000.0
    }
}

/// Widths of characters 32..=126 in Helvetica.
#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    278, 278, 584, 584, 584, 556, 1015,
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    278, 278, 278, 469, 556, 333,
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,
    334, 260, 334, 584,
];

/// Widths of characters 32..=126 in Helvetica-Bold.
#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    333, 333, 584, 584, 584, 611, 975,
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    333, 278, 333, 584, 556, 333,
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889,
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500,
    389, 280, 389, 584,
];

/// Width used for characters outside the tables.
const DEFAULT_WIDTH: u16 = 556;

/// Metrics of the four standard Helvetica faces.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardFontMetrics;

impl FontMetrics for StandardFontMetrics {
    fn char_width(&self, ch: char, style: FontStyle) -> u16 {
        let table = if style.is_bold() { &HELVETICA_BOLD } else { &HELVETICA };
        (ch as usize)
            .checked_sub(32)
            .and_then(|index| table.get(index))
            .copied()
            .unwrap_or(DEFAULT_WIDTH)
    }
}
