//! Frame sequence and editing surface.
//!
//! The [`FrameStore`] owns the ordered frames of an animation and the
//! editing surface: the transient pair of planes currently being painted.
//! Stored frames are never edited in place; the surface is captured and
//! written back wholesale with [`FrameStore::replace_at`].

use crate::frame::{Frame, Panel};

/// Errors raised by frame sequence access.
///
/// These indicate a logic error in the caller, never bad user input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FrameStoreError {
    #[error("Frame index {index} out of range (sequence has {len} frames)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Pixel ({x}, {y}) is outside the 16x16 panel")]
    PixelOutOfRange { x: usize, y: usize },
}

/// Ordered frames plus the editing surface.
#[derive(Debug, Clone, Default)]
pub struct FrameStore {
    frames: Vec<Frame>,
    surface: Frame,
}

impl FrameStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a frame at the end of the sequence.
    pub fn append(&mut self, frame: Frame) {
        self.frames.push(frame);
    }

    /// Replace the frame at `index` wholesale.
    pub fn replace_at(&mut self, index: usize, frame: Frame) -> Result<(), FrameStoreError> {
        let len = self.frames.len();
        let slot = self
            .frames
            .get_mut(index)
            .ok_or(FrameStoreError::IndexOutOfRange { index, len })?;
        *slot = frame;
        Ok(())
    }

    /// Frame at `index`.
    pub fn get(&self, index: usize) -> Result<&Frame, FrameStoreError> {
        self.frames
            .get(index)
            .ok_or(FrameStoreError::IndexOutOfRange {
                index,
                len: self.frames.len(),
            })
    }

    /// Drop every frame. The editing surface is left alone.
    pub fn clear_sequence(&mut self) {
        self.frames.clear();
    }

    /// Swap in a whole new sequence (load, text generation).
    pub fn replace_sequence(&mut self, frames: Vec<Frame>) {
        self.frames = frames;
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Turn off every pixel on both surface planes.
    pub fn clear_editing_surface(&mut self) {
        self.surface.left.clear();
        self.surface.right.clear();
    }

    /// Snapshot of the editing surface as a frame.
    pub fn capture_editing_surface(&self) -> Frame {
        self.surface.clone()
    }

    /// Overwrite the editing surface with `frame`.
    pub fn load_into_editing_surface(&mut self, frame: &Frame) {
        self.surface.clone_from(frame);
    }

    /// Read-only view of the editing surface.
    pub fn editing_surface(&self) -> &Frame {
        &self.surface
    }

    /// Paint one pixel of the editing surface.
    pub fn set_pixel(
        &mut self,
        panel: Panel,
        x: usize,
        y: usize,
        on: bool,
    ) -> Result<(), FrameStoreError> {
        if self.surface.plane_mut(panel).set(x, y, on) {
            Ok(())
        } else {
            Err(FrameStoreError::PixelOutOfRange { x, y })
        }
    }

    /// Pixel of the editing surface. Off-panel coordinates read as off.
    pub fn pixel(&self, panel: Panel, x: usize, y: usize) -> bool {
        self.surface.plane(panel).get(x, y)
    }
}
