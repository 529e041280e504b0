//! Built-in 7x4 bitmap font.
//!
//! Covers ASCII letters (lowercase is drawn as uppercase), digits, space
//! and common punctuation. Anything else renders as a blank glyph.

use super::{Glyph, GlyphLookup};

/// The default 7-row by 4-column font.
#[derive(Debug, Clone, Copy, Default)]
pub struct Font7x4;

impl Font7x4 {
    /// Bitmap for `ch`, or `None` when the font has no glyph for it.
    pub fn lookup(&self, ch: char) -> Option<Glyph> {
        let masks: [u8; 7] = match ch.to_ascii_uppercase() {
            ' ' => [0, 0, 0, 0, 0, 0, 0],
            'A' => [0b0110, 0b1001, 0b1001, 0b1111, 0b1001, 0b1001, 0b1001],
            'B' => [0b1110, 0b1001, 0b1001, 0b1110, 0b1001, 0b1001, 0b1110],
            'C' => [0b0110, 0b1001, 0b1000, 0b1000, 0b1000, 0b1001, 0b0110],
            'D' => [0b1110, 0b1001, 0b1001, 0b1001, 0b1001, 0b1001, 0b1110],
            'E' => [0b1111, 0b1000, 0b1000, 0b1110, 0b1000, 0b1000, 0b1111],
            'F' => [0b1111, 0b1000, 0b1000, 0b1110, 0b1000, 0b1000, 0b1000],
            'G' => [0b0110, 0b1001, 0b1000, 0b1011, 0b1001, 0b1001, 0b0111],
            'H' => [0b1001, 0b1001, 0b1001, 0b1111, 0b1001, 0b1001, 0b1001],
            'I' => [0b0111, 0b0010, 0b0010, 0b0010, 0b0010, 0b0010, 0b0111],
            'J' => [0b0011, 0b0001, 0b0001, 0b0001, 0b0001, 0b1001, 0b0110],
            'K' => [0b1001, 0b1001, 0b1010, 0b1100, 0b1010, 0b1001, 0b1001],
            'L' => [0b1000, 0b1000, 0b1000, 0b1000, 0b1000, 0b1000, 0b1111],
            'M' => [0b1001, 0b1111, 0b1111, 0b1001, 0b1001, 0b1001, 0b1001],
            'N' => [0b1001, 0b1101, 0b1101, 0b1011, 0b1011, 0b1001, 0b1001],
            'O' => [0b0110, 0b1001, 0b1001, 0b1001, 0b1001, 0b1001, 0b0110],
            'P' => [0b1110, 0b1001, 0b1001, 0b1110, 0b1000, 0b1000, 0b1000],
            'Q' => [0b0110, 0b1001, 0b1001, 0b1001, 0b1011, 0b1010, 0b0101],
            'R' => [0b1110, 0b1001, 0b1001, 0b1110, 0b1100, 0b1010, 0b1001],
            'S' => [0b0111, 0b1000, 0b1000, 0b0110, 0b0001, 0b0001, 0b1110],
            'T' => [0b1110, 0b0100, 0b0100, 0b0100, 0b0100, 0b0100, 0b0100],
            'U' => [0b1001, 0b1001, 0b1001, 0b1001, 0b1001, 0b1001, 0b0110],
            'V' => [0b1001, 0b1001, 0b1001, 0b1001, 0b1001, 0b0110, 0b0110],
            'W' => [0b1001, 0b1001, 0b1001, 0b1001, 0b1111, 0b1111, 0b1001],
            'X' => [0b1001, 0b1001, 0b0110, 0b0110, 0b0110, 0b1001, 0b1001],
            'Y' => [0b1010, 0b1010, 0b1010, 0b0100, 0b0100, 0b0100, 0b0100],
            'Z' => [0b1111, 0b0001, 0b0010, 0b0110, 0b0100, 0b1000, 0b1111],
            '0' => [0b0110, 0b1001, 0b1011, 0b1101, 0b1001, 0b1001, 0b0110],
            '1' => [0b0010, 0b0110, 0b0010, 0b0010, 0b0010, 0b0010, 0b0111],
            '2' => [0b0110, 0b1001, 0b0001, 0b0010, 0b0100, 0b1000, 0b1111],
            '3' => [0b1110, 0b0001, 0b0001, 0b0110, 0b0001, 0b0001, 0b1110],
            '4' => [0b1001, 0b1001, 0b1001, 0b1111, 0b0001, 0b0001, 0b0001],
            '5' => [0b1111, 0b1000, 0b1110, 0b0001, 0b0001, 0b1001, 0b0110],
            '6' => [0b0110, 0b1000, 0b1000, 0b1110, 0b1001, 0b1001, 0b0110],
            '7' => [0b1111, 0b0001, 0b0010, 0b0100, 0b0100, 0b0100, 0b0100],
            '8' => [0b0110, 0b1001, 0b1001, 0b0110, 0b1001, 0b1001, 0b0110],
            '9' => [0b0110, 0b1001, 0b1001, 0b0111, 0b0001, 0b0001, 0b0110],
            '!' => [0b0100, 0b0100, 0b0100, 0b0100, 0b0100, 0b0000, 0b0100],
            '?' => [0b0110, 0b1001, 0b0001, 0b0010, 0b0100, 0b0000, 0b0100],
            '.' => [0, 0, 0, 0, 0, 0, 0b0100],
            ',' => [0, 0, 0, 0, 0, 0b0100, 0b1000],
            ':' => [0, 0b0100, 0b0100, 0, 0b0100, 0b0100, 0],
            ';' => [0, 0b0100, 0b0100, 0, 0b0100, 0b0100, 0b1000],
            '\'' => [0b0100, 0b0100, 0, 0, 0, 0, 0],
            '"' => [0b1010, 0b1010, 0, 0, 0, 0, 0],
            '-' => [0, 0, 0, 0b1111, 0, 0, 0],
            '+' => [0, 0b0100, 0b0100, 0b1110, 0b0100, 0b0100, 0],
            '=' => [0, 0, 0b1111, 0, 0b1111, 0, 0],
            '_' => [0, 0, 0, 0, 0, 0, 0b1111],
            '*' => [0, 0b1001, 0b0110, 0b1111, 0b0110, 0b1001, 0],
            '/' => [0b0001, 0b0001, 0b0010, 0b0110, 0b0100, 0b1000, 0b1000],
            '(' => [0b0010, 0b0100, 0b1000, 0b1000, 0b1000, 0b0100, 0b0010],
            ')' => [0b0100, 0b0010, 0b0001, 0b0001, 0b0001, 0b0010, 0b0100],
            '<' => [0b0001, 0b0010, 0b0100, 0b1000, 0b0100, 0b0010, 0b0001],
            '>' => [0b1000, 0b0100, 0b0010, 0b0001, 0b0010, 0b0100, 0b1000],
            '#' => [0b0101, 0b0101, 0b1111, 0b0101, 0b1111, 0b0101, 0b0101],
            _ => return None,
        };
        Some(Glyph::from_masks(masks))
    }
}

impl GlyphLookup for Font7x4 {
    fn glyph(&self, ch: char) -> Glyph {
        self.lookup(ch).unwrap_or_else(|| {
            tracing::debug!(?ch, "no glyph for character, using blank");
            Glyph::blank()
        })
    }
}
