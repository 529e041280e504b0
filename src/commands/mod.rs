//! CLI command handlers.

pub mod completions;
pub mod config;
pub mod info;
pub mod new;
pub mod normalize;
pub mod play;
pub mod scroll;
pub mod show;

use std::path::Path;

use anyhow::{Context, Result};
use eyeframe::document::{self, Decoded};

/// Load a session file, reporting repairs on stderr.
fn load_session(path: &Path) -> Result<Decoded> {
    if !path.exists() {
        anyhow::bail!("File not found: {}", path.display());
    }
    let decoded = document::load(path)
        .with_context(|| format!("Failed to load session {}", path.display()))?;

    if !decoded.report.is_clean() {
        eprintln!(
            "note: {} was repaired while loading (run `eyeframe normalize` to fix the file):",
            path.display()
        );
        for line in decoded.report.describe() {
            eprintln!("  - {}", line);
        }
    }
    Ok(decoded)
}
