//! Session lifecycle, storage binding and dirty tracking.
//!
//! A [`SessionManager`] owns the [`FrameStore`] together with the session
//! settings (frame rate, loop flag), the storage location the session is
//! bound to, and the dirty flag.
//!
//! # States
//!
//! - `Idle`: nothing is being edited; painting is refused
//! - `Active`: a session was started or loaded; painting is allowed
//!
//! The dirty flag is only ever raised while a storage location is bound:
//! edits made before the first save are not tracked.

mod outcome;

pub use outcome::SaveOutcome;

use std::path::{Path, PathBuf};

use crate::document::{self, DocumentError, FrameRate, NormalizeReport, Session};
use crate::frame::{Frame, Panel};
use crate::store::{FrameStore, FrameStoreError};

/// Editing state of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Idle,
    Active,
}

/// Errors raised by session storage operations.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Document(#[from] DocumentError),

    #[error(transparent)]
    Store(#[from] FrameStoreError),
}

/// Owns the frame store and everything needed to persist it.
#[derive(Debug, Clone)]
pub struct SessionManager {
    store: FrameStore,
    state: SessionState,
    fps: FrameRate,
    looping: bool,
    binding: Option<PathBuf>,
    dirty: bool,
}

impl SessionManager {
    /// A manager in the `Idle` state with 12 fps and looping enabled.
    pub fn new() -> Self {
        Self::with_settings(FrameRate::default(), true)
    }

    /// A manager in the `Idle` state with the given playback settings.
    pub fn with_settings(fps: FrameRate, looping: bool) -> Self {
        Self {
            store: FrameStore::new(),
            state: SessionState::Idle,
            fps,
            looping,
            binding: None,
            dirty: false,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state == SessionState::Active
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Storage location the session is bound to, if any.
    pub fn binding(&self) -> Option<&Path> {
        self.binding.as_deref()
    }

    pub fn store(&self) -> &FrameStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut FrameStore {
        &mut self.store
    }

    pub fn frame_rate(&self) -> FrameRate {
        self.fps
    }

    pub fn looping(&self) -> bool {
        self.looping
    }

    /// Start a fresh session bound (not yet saved) to `name`.
    ///
    /// Returns `false` and changes nothing when `name` is blank.
    pub fn start_session(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() {
            tracing::debug!("ignoring session start with empty name");
            return false;
        }

        self.store.clear_sequence();
        self.store.clear_editing_surface();
        self.binding = Some(PathBuf::from(name));
        self.state = SessionState::Active;
        self.dirty = true;

        tracing::info!(name, "started session");
        true
    }

    /// Leave the session. Frames and the storage binding are kept.
    ///
    /// Clearing the surface counts as a modification, like `clear_surface`.
    pub fn end_session(&mut self) {
        self.store.clear_editing_surface();
        self.mark_modified();
        self.state = SessionState::Idle;
        tracing::info!("ended session");
    }

    /// Replace the session with the one stored at `path`.
    ///
    /// The first frame (if any) is shown on the editing surface.
    pub fn load_from(&mut self, path: &Path) -> Result<NormalizeReport, SessionError> {
        let decoded = document::load(path)?;
        let Session {
            fps,
            looping,
            frames,
        } = decoded.session;

        self.store.replace_sequence(frames);
        if let Ok(first) = self.store.get(0) {
            let first = first.clone();
            self.store.load_into_editing_surface(&first);
        }
        self.fps = fps;
        self.looping = looping;
        self.binding = Some(path.to_path_buf());
        self.state = SessionState::Active;
        self.dirty = false;

        tracing::info!(path = %path.display(), frames = self.store.len(), %fps, "loaded session");
        Ok(decoded.report)
    }

    /// Write the session to `path` and bind to it.
    pub fn save_to(&mut self, path: &Path) -> Result<(), SessionError> {
        document::save(&self.session(), path)?;
        self.binding = Some(path.to_path_buf());
        self.dirty = false;

        tracing::info!(path = %path.display(), frames = self.store.len(), "saved session");
        Ok(())
    }

    /// Write pending changes to the bound location.
    pub fn save_if_dirty(&mut self) -> Result<SaveOutcome, SessionError> {
        let path = match (&self.binding, self.dirty) {
            (Some(path), true) => path.clone(),
            _ => {
                tracing::debug!("nothing to save");
                return Ok(SaveOutcome::NothingToSave);
            }
        };

        document::save(&self.session(), &path)?;
        self.dirty = false;

        tracing::info!(path = %path.display(), "saved pending changes");
        Ok(SaveOutcome::Saved(path))
    }

    /// Flag unsaved changes. A no-op while no storage location is bound.
    pub fn mark_modified(&mut self) {
        if self.binding.is_some() {
            self.dirty = true;
        }
    }

    /// Set the frame rate from user text; unusable input becomes 12.
    pub fn set_frame_rate(&mut self, input: &str) {
        self.fps = FrameRate::parse(input);
        self.mark_modified();
    }

    pub fn set_looping(&mut self, looping: bool) {
        self.looping = looping;
        self.mark_modified();
    }

    /// Paint one pixel of the editing surface.
    ///
    /// Returns `Ok(false)` without painting while the session is idle.
    pub fn paint(
        &mut self,
        panel: Panel,
        x: usize,
        y: usize,
        on: bool,
    ) -> Result<bool, FrameStoreError> {
        if !self.is_active() {
            return Ok(false);
        }
        self.store.set_pixel(panel, x, y, on)?;
        tracing::trace!(panel = panel.name(), x, y, on, "painted pixel");
        self.mark_modified();
        Ok(true)
    }

    /// Append the editing surface as a new frame and clear the surface.
    ///
    /// Returns the new frame's index, or `None` while idle.
    pub fn commit_surface(&mut self) -> Option<usize> {
        if !self.is_active() {
            return None;
        }
        let frame = self.store.capture_editing_surface();
        self.store.append(frame);
        self.store.clear_editing_surface();
        self.mark_modified();
        Some(self.store.len() - 1)
    }

    /// Overwrite the stored frame at `index` with the editing surface.
    pub fn write_surface_to(&mut self, index: usize) -> Result<(), FrameStoreError> {
        let frame = self.store.capture_editing_surface();
        self.store.replace_at(index, frame)?;
        self.mark_modified();
        Ok(())
    }

    /// Replace all frames (e.g. with compiled text). Refused while idle.
    pub fn replace_frames(&mut self, frames: Vec<Frame>) -> bool {
        if !self.is_active() {
            return false;
        }
        self.store.replace_sequence(frames);
        self.mark_modified();
        true
    }

    /// Clear both editing-surface planes.
    pub fn clear_surface(&mut self) {
        self.store.clear_editing_surface();
        self.mark_modified();
    }

    /// Snapshot of the persisted part of the session.
    pub fn session(&self) -> Session {
        Session {
            fps: self.fps,
            looping: self.looping,
            frames: self.store.frames().to_vec(),
        }
    }
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new()
    }
}
