//! Editor composition root.
//!
//! [`EditorState`] bundles the session, the playback scheduler and the
//! glyph table behind one command interface. A front end (GUI, TUI, the
//! CLI) translates user input into [`EditorCommand`]s, hands them to
//! [`EditorState::apply`], and reads the state back to draw itself. The
//! core never calls into the front end.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::document::{FrameRate, NormalizeReport};
use crate::frame::Panel;
use crate::playback::PlaybackScheduler;
use crate::scroll::{self, Font7x4, GlyphLookup};
use crate::session::{SaveOutcome, SessionError, SessionManager};

/// Everything a front end can ask the editor to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorCommand {
    /// Start a new session bound to the given name
    StartSession { name: String },
    /// Leave the current session
    EndSession,
    /// Set or clear one pixel of the editing surface
    Paint {
        panel: Panel,
        x: usize,
        y: usize,
        on: bool,
    },
    /// Clear both editing-surface planes
    ClearSurface,
    /// Append the editing surface as a new frame
    CommitFrame,
    /// Show a stored frame on the editing surface for editing
    SelectFrame(usize),
    /// Write the editing surface back over the selected frame
    SaveFrameChanges,
    /// Replace all frames with scrolling text
    GenerateText(String),
    /// Set the frame rate from user text
    SetFrameRate(String),
    /// Set the loop flag
    SetLooping(bool),
    /// Load a session file
    Load(PathBuf),
    /// Save to a file and bind to it
    SaveAs(PathBuf),
    /// Save pending changes to the bound file
    SaveIfDirty,
    /// Start playback preview
    StartPlayback,
    /// Stop playback preview
    StopPlayback,
}

/// What a command did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// The command took effect
    Applied,
    /// The command was a no-op; the reason is suitable for a status line
    Ignored(&'static str),
    /// A frame was appended at this index
    FrameAdded(usize),
    /// Text generation produced this many frames
    FramesGenerated(usize),
    /// A session was loaded; the report lists repairs made to the file
    Loaded(NormalizeReport),
    /// Result of a save-if-dirty request
    Saved(SaveOutcome),
    /// Playback started with this tick interval
    PlaybackStarted(Duration),
}

/// Session, playback and glyph table behind one command interface.
pub struct EditorState {
    session: SessionManager,
    playback: PlaybackScheduler,
    glyphs: Box<dyn GlyphLookup>,
    selected: Option<usize>,
}

impl EditorState {
    /// Editor using the built-in font and the given playback settings.
    pub fn new(fps: FrameRate, looping: bool) -> Self {
        Self::with_glyphs(fps, looping, Box::new(Font7x4))
    }

    /// Editor using a custom glyph table.
    pub fn with_glyphs(fps: FrameRate, looping: bool, glyphs: Box<dyn GlyphLookup>) -> Self {
        Self {
            session: SessionManager::with_settings(fps, looping),
            playback: PlaybackScheduler::new(),
            glyphs,
            selected: None,
        }
    }

    pub fn session(&self) -> &SessionManager {
        &self.session
    }

    pub fn playback(&self) -> &PlaybackScheduler {
        &self.playback
    }

    /// Index of the frame being edited, if one was selected.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Apply a command. Playback timing uses the current time.
    pub fn apply(&mut self, command: EditorCommand) -> Result<CommandOutcome, SessionError> {
        self.apply_at(command, Instant::now())
    }

    /// Apply a command with an explicit clock reading.
    pub fn apply_at(
        &mut self,
        command: EditorCommand,
        now: Instant,
    ) -> Result<CommandOutcome, SessionError> {
        use EditorCommand::*;

        let outcome = match command {
            StartSession { name } => {
                if self.session.start_session(&name) {
                    self.selected = None;
                    CommandOutcome::Applied
                } else {
                    CommandOutcome::Ignored("session name is empty")
                }
            }
            EndSession => {
                self.session.end_session();
                CommandOutcome::Applied
            }
            Paint { panel, x, y, on } => {
                if self.session.paint(panel, x, y, on)? {
                    CommandOutcome::Applied
                } else {
                    CommandOutcome::Ignored("no active session")
                }
            }
            ClearSurface => {
                self.session.clear_surface();
                CommandOutcome::Applied
            }
            CommitFrame => match self.session.commit_surface() {
                Some(index) => CommandOutcome::FrameAdded(index),
                None => CommandOutcome::Ignored("no active session"),
            },
            SelectFrame(index) => {
                let frame = self.session.store().get(index)?.clone();
                self.session.store_mut().load_into_editing_surface(&frame);
                self.selected = Some(index);
                CommandOutcome::Applied
            }
            SaveFrameChanges => match self.selected {
                Some(index) => {
                    self.session.write_surface_to(index)?;
                    CommandOutcome::Applied
                }
                None => CommandOutcome::Ignored("no frame selected"),
            },
            GenerateText(text) => {
                let frames = scroll::compile(&text, self.glyphs.as_ref());
                let count = frames.len();
                if self.session.replace_frames(frames) {
                    self.selected = None;
                    CommandOutcome::FramesGenerated(count)
                } else {
                    CommandOutcome::Ignored("no active session")
                }
            }
            SetFrameRate(input) => {
                self.session.set_frame_rate(&input);
                CommandOutcome::Applied
            }
            SetLooping(looping) => {
                self.session.set_looping(looping);
                CommandOutcome::Applied
            }
            Load(path) => {
                let report = self.session.load_from(&path)?;
                self.selected = None;
                CommandOutcome::Loaded(report)
            }
            SaveAs(path) => {
                self.session.save_to(&path)?;
                CommandOutcome::Applied
            }
            SaveIfDirty => CommandOutcome::Saved(self.session.save_if_dirty()?),
            StartPlayback => {
                let fps = self.session.frame_rate();
                match self.playback.start(self.session.store(), fps, now) {
                    Some(interval) => CommandOutcome::PlaybackStarted(interval),
                    None => CommandOutcome::Ignored("no frames to play"),
                }
            }
            StopPlayback => {
                self.playback.stop();
                CommandOutcome::Applied
            }
        };

        Ok(outcome)
    }

    /// Advance playback one frame regardless of the schedule.
    pub fn tick(&mut self) -> Option<usize> {
        self.playback.tick(self.session.store_mut())
    }

    /// Advance playback if a tick is due at `now`.
    pub fn poll_playback(&mut self, now: Instant) -> Option<usize> {
        self.playback.poll(self.session.store_mut(), now)
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new(FrameRate::default(), true)
    }
}

impl std::fmt::Debug for EditorState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditorState")
            .field("session", &self.session)
            .field("playback", &self.playback)
            .field("selected", &self.selected)
            .finish_non_exhaustive()
    }
}
