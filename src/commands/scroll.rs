//! `eyeframe scroll`

use std::path::Path;

use anyhow::Result;
use eyeframe::editor::{CommandOutcome, EditorCommand, EditorState};
use eyeframe::Config;

/// Compile `text` into a scrolling session and write it to `output`.
#[cfg(not(tarpaulin_include))]
pub fn handle(text: &str, output: &Path, fps: Option<&str>, no_loop: bool) -> Result<()> {
    let config = Config::load()?;
    let looping = config.session.default_loop && !no_loop;

    let mut editor = EditorState::new(config.frame_rate(), looping);
    let started = editor.apply(EditorCommand::StartSession {
        name: output.to_string_lossy().into_owned(),
    })?;
    if let CommandOutcome::Ignored(reason) = started {
        anyhow::bail!("Cannot write to {:?}: {}", output, reason);
    }
    if let Some(fps) = fps {
        editor.apply(EditorCommand::SetFrameRate(fps.to_string()))?;
    }

    let count = match editor.apply(EditorCommand::GenerateText(text.to_string()))? {
        CommandOutcome::FramesGenerated(count) => count,
        CommandOutcome::Ignored(reason) => anyhow::bail!("Text was not compiled: {}", reason),
        other => anyhow::bail!("Unexpected outcome compiling text: {:?}", other),
    };
    editor.apply(EditorCommand::SaveAs(output.to_path_buf()))?;

    println!(
        "Wrote {} frames to {} ({} fps)",
        count,
        output.display(),
        editor.session().frame_rate()
    );
    Ok(())
}
