//! Session document format.
//!
//! Sessions are stored as pretty-printed JSON:
//!
//! ```json
//! {
//!   "fps": 12,
//!   "loop": true,
//!   "frames": [
//!     { "left": [0, 1, ...], "right": [0, 0, ...] }
//!   ]
//! }
//! ```
//!
//! Each plane is 256 values, row-major. Reading goes through the
//! [`normalize`] pass, so legacy documents (nested 16x16 planes, wrong
//! lengths, missing fields) load instead of failing.

pub mod normalize;

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Serialize;

use crate::frame::Frame;

pub use normalize::NormalizeReport;

/// Frame rate used when none is given or the given one is unusable.
pub const DEFAULT_FPS: u32 = 12;

/// Errors raised while reading or writing a session document.
///
/// Malformed frame data is never an error; only unreadable files and
/// documents that are not a JSON object at all are.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("Failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Session document must be a JSON object (got {found})")]
    NotAnObject { found: &'static str },
}

/// Playback rate in frames per second. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct FrameRate(u32);

impl FrameRate {
    /// Build from a raw integer; zero, negative and out-of-range values
    /// fall back to 12.
    pub fn new(fps: i64) -> Self {
        match u32::try_from(fps) {
            Ok(fps) if fps > 0 => Self(fps),
            _ => Self::default(),
        }
    }

    /// Build from user text (e.g. an input field). Anything that is not
    /// a positive integer falls back to 12.
    pub fn parse(input: &str) -> Self {
        input
            .trim()
            .parse::<i64>()
            .map(Self::new)
            .unwrap_or_default()
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Time between frames: `round(1000 / fps)` milliseconds.
    pub fn interval(self) -> Duration {
        let fps = u64::from(self.0);
        let (whole, rest) = (1000 / fps, 1000 % fps);
        // Ties round to even
        let round_up = 2 * rest > fps || (2 * rest == fps && whole % 2 == 1);
        Duration::from_millis(whole + u64::from(round_up))
    }
}

impl Default for FrameRate {
    fn default() -> Self {
        Self(DEFAULT_FPS)
    }
}

impl std::fmt::Display for FrameRate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The persisted unit of work: playback settings plus frames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub fps: FrameRate,
    pub looping: bool,
    pub frames: Vec<Frame>,
}

impl Session {
    pub fn new(fps: FrameRate, looping: bool) -> Self {
        Self {
            fps,
            looping,
            frames: Vec::new(),
        }
    }

    /// Total playback time of one pass through the frames.
    pub fn duration(&self) -> Duration {
        self.fps.interval() * self.frames.len() as u32
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(FrameRate::default(), true)
    }
}

/// On-disk field layout.
#[derive(Serialize)]
struct DocumentRef<'a> {
    fps: FrameRate,
    #[serde(rename = "loop")]
    looping: bool,
    frames: &'a [Frame],
}

impl<'a> From<&'a Session> for DocumentRef<'a> {
    fn from(session: &'a Session) -> Self {
        Self {
            fps: session.fps,
            looping: session.looping,
            frames: &session.frames,
        }
    }
}

/// A decoded session plus what the normalization pass had to fix.
#[derive(Debug, Clone)]
pub struct Decoded {
    pub session: Session,
    pub report: NormalizeReport,
}

/// Serialize a session to pretty-printed JSON.
pub fn to_string(session: &Session) -> Result<String, DocumentError> {
    Ok(serde_json::to_string_pretty(&DocumentRef::from(session))?)
}

/// Serialize a session to a writer.
pub fn to_writer<W: Write>(session: &Session, writer: W) -> Result<(), DocumentError> {
    serde_json::to_writer_pretty(writer, &DocumentRef::from(session))?;
    Ok(())
}

/// Decode a session from JSON text.
pub fn from_str(content: &str) -> Result<Decoded, DocumentError> {
    let value: serde_json::Value = serde_json::from_str(content)?;
    from_value(&value)
}

/// Decode a session from an already-parsed JSON value.
pub fn from_value(value: &serde_json::Value) -> Result<Decoded, DocumentError> {
    let root = value.as_object().ok_or(DocumentError::NotAnObject {
        found: normalize::kind_of(value),
    })?;
    let (session, report) = normalize::normalize_document(root);
    Ok(Decoded { session, report })
}

/// Read and decode the session stored at `path`.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Decoded, DocumentError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| DocumentError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    from_str(&content)
}

/// Encode `session` and write it to `path`, replacing any existing file.
pub fn save<P: AsRef<Path>>(session: &Session, path: P) -> Result<(), DocumentError> {
    let path = path.as_ref();
    let mut content = to_string(session)?;
    content.push('\n');
    fs::write(path, content).map_err(|source| DocumentError::Write {
        path: path.to_path_buf(),
        source,
    })
}
