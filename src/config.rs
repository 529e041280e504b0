//! User configuration.
//!
//! Stored as TOML at `<config_dir>/eyeframe/config.toml`. Every key is
//! optional; missing keys (or a missing file) fall back to defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::document::{FrameRate, DEFAULT_FPS};

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "EYEFRAME_CONFIG";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not determine config directory")]
    NoConfigDir,

    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write config {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub session: SessionConfig,
    pub playback: PlaybackConfig,
}

/// Defaults for new sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Frame rate for new sessions
    pub default_fps: u32,
    /// Whether new sessions loop
    pub default_loop: bool,
    /// Where `eyeframe new` writes sessions (current directory when unset)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            default_fps: DEFAULT_FPS,
            default_loop: true,
            directory: None,
        }
    }
}

/// How frames are drawn in the terminal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Glyph for a lit pixel
    pub on_glyph: String,
    /// Glyph for an unlit pixel
    pub off_glyph: String,
    /// Columns of space between the two panels
    pub panel_gap: usize,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            on_glyph: "●".to_string(),
            off_glyph: "○".to_string(),
            panel_gap: 2,
        }
    }
}

impl Config {
    /// Load the user config, or defaults if none exists.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load config from a specific file, or defaults if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(toml::from_str(&content)?)
    }

    /// Write the config to the user config file.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Write the config to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        let write_err = |source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        fs::write(path, content).map_err(write_err)
    }

    /// Location of the user config file.
    ///
    /// `EYEFRAME_CONFIG` overrides the platform config directory.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
            return Ok(PathBuf::from(path));
        }
        dirs::config_dir()
            .map(|dir| dir.join("eyeframe").join("config.toml"))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Frame rate for new sessions; out-of-range values become 12.
    pub fn frame_rate(&self) -> FrameRate {
        FrameRate::new(i64::from(self.session.default_fps))
    }

    /// Directory new sessions are written to.
    pub fn session_directory(&self) -> PathBuf {
        self.session
            .directory
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }
}
