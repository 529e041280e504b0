//! Command-line interface definition.
//!
//! Lives in the library so `xtask` can render the man page from it.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Version string with build date and commit, e.g. `0.1.0 (2026-10-18, 1a2b3c4)`.
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("EYEFRAME_BUILD_DATE"),
    ", ",
    env!("VERGEN_GIT_SHA"),
    ")"
);

#[derive(Debug, Parser)]
#[command(
    name = "eyeframe",
    version,
    long_version = LONG_VERSION,
    about = "Author frame animations for a pair of 16x16 LED panels",
    long_about = "Author frame animations for a pair of 16x16 monochrome LED panels.\n\n\
        Sessions are JSON documents holding a frame rate, a loop flag and a list of \
        frames. Each frame has a left and a right 16x16 bit plane."
)]
pub struct Cli {
    /// Show debug logging on stderr (EYEFRAME_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new, empty session file
    #[command(long_about = "Create a new, empty session file.\n\n\
        The name is turned into a safe file name with a .json extension and \
        written to the configured session directory.\n\n\
        EXAMPLE:\n  eyeframe new \"happy eyes\" --fps 24")]
    New {
        /// Session name
        name: String,
        /// Frame rate (defaults to the configured rate)
        #[arg(long)]
        fps: Option<String>,
        /// Directory to write to (overrides the configured directory)
        #[arg(long)]
        dir: Option<PathBuf>,
    },

    /// Compile scrolling text into a session
    #[command(long_about = "Compile scrolling text into a session.\n\n\
        The text scrolls right to left across both panels, one column per frame.\n\n\
        EXAMPLE:\n  eyeframe scroll \"HELLO\" --output hello.json")]
    Scroll {
        /// Text to scroll
        text: String,
        /// File to write
        #[arg(short, long)]
        output: PathBuf,
        /// Frame rate (defaults to the configured rate)
        #[arg(long)]
        fps: Option<String>,
        /// Play once instead of looping
        #[arg(long)]
        no_loop: bool,
    },

    /// Print frames as text
    Show {
        /// Session file
        file: PathBuf,
        /// Only show this frame (zero-based)
        #[arg(short, long)]
        frame: Option<usize>,
    },

    /// Show session details
    Info {
        /// Session file
        file: PathBuf,
    },

    /// Preview the animation in the terminal
    #[command(long_about = "Preview the animation in the terminal.\n\n\
        Press Ctrl+C to stop. Without --cycles, looping sessions play until \
        stopped and non-looping sessions play once.")]
    Play {
        /// Session file
        file: PathBuf,
        /// Override the frame rate
        #[arg(long)]
        fps: Option<String>,
        /// Stop after this many passes through the frames
        #[arg(long)]
        cycles: Option<u32>,
    },

    /// Rewrite a session file in canonical form
    #[command(long_about = "Rewrite a session file in canonical form.\n\n\
        Legacy nested planes are flattened, malformed planes are zero-filled \
        and missing header fields get their defaults. A summary of the repairs \
        is printed.")]
    Normalize {
        /// Session file
        file: PathBuf,
        /// Write here instead of overwriting the input
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Show the current configuration
    Show,
    /// Open the config file in $EDITOR
    Edit,
}
