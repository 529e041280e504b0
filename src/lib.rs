//! Eyeframe - frame animation authoring for a pair of 16x16 LED panels.
//!
//! A session is an ordered list of frames, each holding one 16x16 bit
//! plane per panel, plus a frame rate and a loop flag. The library covers
//! editing ([`store`], [`session`], [`editor`]), text-to-animation
//! compilation ([`scroll`]), the JSON session format ([`document`]) and
//! timed playback ([`playback`]).

pub mod cli;
pub mod config;
pub mod document;
pub mod editor;
pub mod files;
pub mod frame;
pub mod logging;
pub mod playback;
pub mod render;
pub mod scroll;
pub mod session;
pub mod store;

pub use config::Config;
pub use document::{FrameRate, Session};
pub use editor::{CommandOutcome, EditorCommand, EditorState};
pub use frame::{BitPlane, Frame, Panel};
pub use playback::PlaybackScheduler;
pub use session::{SaveOutcome, SessionManager};
pub use store::FrameStore;
