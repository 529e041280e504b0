//! Scrolling text compiler.
//!
//! Turns a string into a frame sequence that scrolls the text from the
//! right edge of the combined 32-pixel-wide canvas (both panels side by
//! side) to past its left edge, one column per frame.
//!
//! # Layout
//!
//! - Each character is a 7x4 [`Glyph`] supplied by a [`GlyphLookup`]
//! - Glyphs are cut into 4 vertical columns; one blank column separates
//!   adjacent characters (none after the last one)
//! - Columns are drawn on rows 4..=10, centring the glyph on the 16-row panel
//! - Canvas columns 0-15 go to the left panel, 16-31 to the right panel

mod font;

pub use font::Font7x4;

use crate::frame::{BitPlane, Frame, PANEL_SIZE};

/// Glyph height in rows.
pub const GLYPH_HEIGHT: usize = 7;

/// Glyph width in columns.
pub const GLYPH_WIDTH: usize = 4;

/// Width of the combined canvas: both panels side by side.
pub const CANVAS_WIDTH: usize = 2 * PANEL_SIZE;

/// First panel row used by glyph row 0.
pub const GLYPH_TOP: usize = 4;

/// One vertical 7-pixel slice of text, top to bottom.
pub type Column = [bool; GLYPH_HEIGHT];

/// A 7-row by 4-column character bitmap.
///
/// Each row is stored as a 4-bit mask where bit 3 is the leftmost column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Glyph {
    rows: [u8; GLYPH_HEIGHT],
}

impl Glyph {
    /// A glyph with no pixels set.
    pub const fn blank() -> Self {
        Self {
            rows: [0; GLYPH_HEIGHT],
        }
    }

    /// Build from row masks (bit 3 = leftmost column). Bits above the
    /// glyph width are ignored.
    pub const fn from_masks(masks: [u8; GLYPH_HEIGHT]) -> Self {
        let mut rows = [0u8; GLYPH_HEIGHT];
        let mut i = 0;
        while i < GLYPH_HEIGHT {
            rows[i] = masks[i] & 0b1111;
            i += 1;
        }
        Self { rows }
    }

    /// Build from a row-major matrix; any non-zero cell is lit.
    pub fn from_rows(matrix: [[u8; GLYPH_WIDTH]; GLYPH_HEIGHT]) -> Self {
        let mut rows = [0u8; GLYPH_HEIGHT];
        for (mask, row) in rows.iter_mut().zip(matrix) {
            for (col, cell) in row.iter().enumerate() {
                if *cell != 0 {
                    *mask |= 1 << (GLYPH_WIDTH - 1 - col);
                }
            }
        }
        Self { rows }
    }

    /// Pixel at `row` (0..7), `col` (0..4).
    pub fn bit(&self, row: usize, col: usize) -> bool {
        row < GLYPH_HEIGHT
            && col < GLYPH_WIDTH
            && self.rows[row] & (1 << (GLYPH_WIDTH - 1 - col)) != 0
    }

    /// The glyph's columns, left to right.
    pub fn columns(&self) -> [Column; GLYPH_WIDTH] {
        let mut columns = [[false; GLYPH_HEIGHT]; GLYPH_WIDTH];
        for (col, column) in columns.iter_mut().enumerate() {
            for (row, cell) in column.iter_mut().enumerate() {
                *cell = self.bit(row, col);
            }
        }
        columns
    }
}

/// Character to bitmap capability used by the compiler.
pub trait GlyphLookup {
    /// Bitmap for `ch`. Characters the table does not cover should
    /// come back as [`Glyph::blank`].
    fn glyph(&self, ch: char) -> Glyph;
}

impl<F> GlyphLookup for F
where
    F: Fn(char) -> Glyph,
{
    fn glyph(&self, ch: char) -> Glyph {
        self(ch)
    }
}

/// Flatten `text` into its column sequence, with one blank column
/// between adjacent characters.
pub fn text_columns(text: &str, glyphs: &dyn GlyphLookup) -> Vec<Column> {
    let count = text.chars().count();
    let mut columns = Vec::with_capacity(count * (GLYPH_WIDTH + 1));

    for (idx, ch) in text.chars().enumerate() {
        columns.extend(glyphs.glyph(ch).columns());
        if idx + 1 != count {
            columns.push([false; GLYPH_HEIGHT]);
        }
    }

    columns
}

/// Number of frames a scroll over `column_count` columns produces.
pub fn frame_count(column_count: usize) -> usize {
    CANVAS_WIDTH + column_count + 2
}

/// Render the canvas with column 0 of the text placed at canvas
/// column `shift`, split into left and right panels.
pub fn frame_at(columns: &[Column], shift: isize) -> Frame {
    let mut left = BitPlane::new();
    let mut right = BitPlane::new();

    for (i, column) in columns.iter().enumerate() {
        let x = shift + i as isize;
        if x < 0 || x >= CANVAS_WIDTH as isize {
            continue;
        }
        let x = x as usize;
        let (plane, px) = if x < PANEL_SIZE {
            (&mut left, x)
        } else {
            (&mut right, x - PANEL_SIZE)
        };
        for (row, &on) in column.iter().enumerate() {
            if on {
                plane.set(px, GLYPH_TOP + row, true);
            }
        }
    }

    Frame::new(left, right)
}

/// Compile `text` into a right-to-left scroll.
///
/// The text starts fully off the right edge and ends fully off the left
/// edge, so the sequence has `32 + columns + 2` frames (34 blank frames
/// for an empty string).
pub fn compile(text: &str, glyphs: &dyn GlyphLookup) -> Vec<Frame> {
    let columns = text_columns(text, glyphs);
    let last_shift = -(columns.len() as isize + 1);

    let frames: Vec<Frame> = (last_shift..=CANVAS_WIDTH as isize)
        .rev()
        .map(|shift| frame_at(&columns, shift))
        .collect();

    tracing::debug!(
        chars = text.chars().count(),
        columns = columns.len(),
        frames = frames.len(),
        "compiled scrolling text"
    );

    frames
}
