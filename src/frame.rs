//! Bit planes and frames for the two 16x16 panels.
//!
//! A [`BitPlane`] is the flattened, row-major pixel state of one panel.
//! A [`Frame`] pairs the left and right planes into one simultaneous
//! snapshot of both panels.

use std::fmt;

use serde::{Serialize, Serializer};

/// Width and height of one panel, in pixels.
pub const PANEL_SIZE: usize = 16;

/// Number of pixels in one panel (16 rows x 16 columns).
pub const PLANE_LEN: usize = PANEL_SIZE * PANEL_SIZE;

/// Errors raised when building a plane from raw values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlaneError {
    #[error("Bit plane must have exactly {PLANE_LEN} values (got {len})")]
    WrongLength { len: usize },

    #[error("Bit plane value at index {index} must be 0 or 1 (got {value})")]
    NonBinary { index: usize, value: u8 },
}

/// Which of the two physical panels a plane belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Panel {
    Left,
    Right,
}

impl Panel {
    /// Lower-case name used in log fields.
    pub fn name(&self) -> &'static str {
        match self {
            Panel::Left => "left",
            Panel::Right => "right",
        }
    }
}

/// One panel's pixels: exactly 256 binary values, row-major.
///
/// The length and the binary range are guaranteed by construction, so
/// every `BitPlane` in the crate is well-formed.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BitPlane {
    bits: [bool; PLANE_LEN],
}

impl BitPlane {
    /// An all-off plane.
    pub fn new() -> Self {
        Self::filled(false)
    }

    /// A plane with every pixel set to `on`.
    pub fn filled(on: bool) -> Self {
        Self {
            bits: [on; PLANE_LEN],
        }
    }

    /// Build a plane from 256 flat `0`/`1` values.
    pub fn from_bits(values: &[u8]) -> Result<Self, PlaneError> {
        if values.len() != PLANE_LEN {
            return Err(PlaneError::WrongLength { len: values.len() });
        }

        let mut plane = Self::new();
        for (index, &value) in values.iter().enumerate() {
            plane.bits[index] = match value {
                0 => false,
                1 => true,
                _ => return Err(PlaneError::NonBinary { index, value }),
            };
        }
        Ok(plane)
    }

    /// Build a plane from booleans; the iterator is truncated or
    /// zero-padded to 256 values.
    pub fn from_bools(values: impl IntoIterator<Item = bool>) -> Self {
        let mut plane = Self::new();
        for (slot, value) in plane.bits.iter_mut().zip(values) {
            *slot = value;
        }
        plane
    }

    /// Flat index for column `x`, row `y`, or `None` when off the panel.
    pub fn index_of(x: usize, y: usize) -> Option<usize> {
        (x < PANEL_SIZE && y < PANEL_SIZE).then(|| y * PANEL_SIZE + x)
    }

    /// Pixel at column `x`, row `y`. Off-panel coordinates read as off.
    pub fn get(&self, x: usize, y: usize) -> bool {
        Self::index_of(x, y).is_some_and(|i| self.bits[i])
    }

    /// Set the pixel at column `x`, row `y`.
    ///
    /// Returns `false` (and changes nothing) when the coordinates are
    /// outside the panel.
    pub fn set(&mut self, x: usize, y: usize, on: bool) -> bool {
        match Self::index_of(x, y) {
            Some(i) => {
                self.bits[i] = on;
                true
            }
            None => false,
        }
    }

    /// Turn every pixel off.
    pub fn clear(&mut self) {
        self.bits = [false; PLANE_LEN];
    }

    /// Raw row-major pixel states.
    pub fn as_slice(&self) -> &[bool] {
        &self.bits
    }

    /// Row-major pixel values as `0`/`1`.
    pub fn to_bits(&self) -> Vec<u8> {
        self.bits.iter().map(|&on| u8::from(on)).collect()
    }

    /// Iterate the 16 rows of the plane, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.bits.chunks(PANEL_SIZE)
    }

    /// Number of lit pixels.
    pub fn count_on(&self) -> usize {
        self.bits.iter().filter(|&&on| on).count()
    }

    /// Whether every pixel is off.
    pub fn is_blank(&self) -> bool {
        self.bits.iter().all(|&on| !on)
    }
}

impl Default for BitPlane {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for BitPlane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // 256 booleans are unreadable; show the panel as rows instead
        let rows: Vec<String> = self
            .rows()
            .map(|row| row.iter().map(|&on| if on { '#' } else { '.' }).collect())
            .collect();
        f.debug_tuple("BitPlane").field(&rows).finish()
    }
}

impl Serialize for BitPlane {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.bits.iter().map(|&on| u8::from(on)))
    }
}

/// One simultaneous snapshot of both panels.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Frame {
    pub left: BitPlane,
    pub right: BitPlane,
}

impl Frame {
    pub fn new(left: BitPlane, right: BitPlane) -> Self {
        Self { left, right }
    }

    /// A frame with both panels off.
    pub fn blank() -> Self {
        Self::default()
    }

    pub fn plane(&self, panel: Panel) -> &BitPlane {
        match panel {
            Panel::Left => &self.left,
            Panel::Right => &self.right,
        }
    }

    pub fn plane_mut(&mut self, panel: Panel) -> &mut BitPlane {
        match panel {
            Panel::Left => &mut self.left,
            Panel::Right => &mut self.right,
        }
    }

    /// Whether both panels are entirely off.
    pub fn is_blank(&self) -> bool {
        self.left.is_blank() && self.right.is_blank()
    }
}
