//! `eyeframe new`

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use eyeframe::editor::{CommandOutcome, EditorCommand, EditorState};
use eyeframe::files::filename;
use eyeframe::Config;

/// Create an empty session file named after `name`.
#[cfg(not(tarpaulin_include))]
pub fn handle(name: &str, fps: Option<&str>, dir: Option<PathBuf>) -> Result<()> {
    let config = Config::load()?;
    let directory = dir.unwrap_or_else(|| config.session_directory());
    let path = filename::session_path(&directory, name)?;

    if path.exists() {
        anyhow::bail!("Session already exists: {}", path.display());
    }
    fs::create_dir_all(&directory)
        .with_context(|| format!("Failed to create {}", directory.display()))?;

    let mut editor = EditorState::new(config.frame_rate(), config.session.default_loop);
    editor.apply(EditorCommand::StartSession {
        name: path.to_string_lossy().into_owned(),
    })?;
    if let Some(fps) = fps {
        editor.apply(EditorCommand::SetFrameRate(fps.to_string()))?;
    }

    match editor.apply(EditorCommand::SaveIfDirty)? {
        CommandOutcome::Saved(outcome) => println!("{}", outcome.message()),
        other => tracing::warn!(?other, "unexpected outcome saving new session"),
    }
    Ok(())
}
