//! `eyeframe play`
//!
//! Drives the playback scheduler from a plain sleep loop. On a terminal
//! each frame redraws in place; otherwise frames are printed one after
//! another so the output can be piped or captured.

use std::io::{self, Write};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{cursor, execute, terminal};
use eyeframe::editor::{CommandOutcome, EditorCommand, EditorState};
use eyeframe::frame::Frame;
use eyeframe::render::{self, RenderStyle};
use eyeframe::Config;

/// Longest single sleep, so Ctrl+C is noticed promptly at low frame rates.
const MAX_SLEEP: Duration = Duration::from_millis(50);

/// Play a session file in the terminal until stopped.
#[cfg(not(tarpaulin_include))]
pub fn handle(file: &Path, fps: Option<&str>, cycles: Option<u32>) -> Result<()> {
    if !file.exists() {
        anyhow::bail!("File not found: {}", file.display());
    }
    let config = Config::load()?;
    let style = RenderStyle::from(&config.playback);

    let mut editor = EditorState::default();
    let outcome = editor
        .apply(EditorCommand::Load(file.to_path_buf()))
        .with_context(|| format!("Failed to load session {}", file.display()))?;
    if let CommandOutcome::Loaded(report) = outcome {
        for line in report.describe() {
            tracing::warn!("{}: {}", file.display(), line);
        }
    }
    if let Some(fps) = fps {
        editor.apply(EditorCommand::SetFrameRate(fps.to_string()))?;
    }

    let frame_count = editor.session().store().len();
    let interval = match editor.apply(EditorCommand::StartPlayback)? {
        CommandOutcome::PlaybackStarted(interval) => interval,
        _ => {
            println!("No frames to play in {}", file.display());
            return Ok(());
        }
    };

    // Non-looping sessions play once unless told otherwise
    let cycles = cycles.or((!editor.session().looping()).then_some(1));
    let limit = cycles.map(|c| u64::from(c) * frame_count as u64);

    let stop = Arc::new(AtomicBool::new(false));
    let handler_stop = Arc::clone(&stop);
    ctrlc::set_handler(move || handler_stop.store(true, Ordering::SeqCst))
        .context("Failed to install Ctrl+C handler")?;

    let interactive = atty::is(atty::Stream::Stdout);
    let mut stdout = io::stdout();
    if interactive {
        execute!(stdout, cursor::Hide)?;
    }

    tracing::debug!(
        frames = frame_count,
        interval_ms = interval.as_millis() as u64,
        ?limit,
        "starting terminal playback"
    );

    let result = run_loop(&mut editor, &mut stdout, &stop, limit, interactive, &style);

    editor.apply(EditorCommand::StopPlayback)?;
    if interactive {
        execute!(stdout, cursor::Show)?;
    }
    let shown = result?;
    tracing::debug!(shown, "terminal playback finished");
    Ok(())
}

/// Poll the scheduler until stopped or `limit` frames were shown.
fn run_loop(
    editor: &mut EditorState,
    out: &mut impl Write,
    stop: &AtomicBool,
    limit: Option<u64>,
    interactive: bool,
    style: &RenderStyle,
) -> Result<u64> {
    let frame_count = editor.session().store().len();
    let mut shown = 0u64;

    while !stop.load(Ordering::SeqCst) {
        if limit.is_some_and(|limit| shown >= limit) {
            break;
        }

        if let Some(index) = editor.poll_playback(Instant::now()) {
            let frame = editor.session().store().editing_surface();
            draw(out, frame, index, frame_count, interactive, style)?;
            shown += 1;
        }

        let Some(deadline) = editor.playback().next_deadline() else {
            break;
        };
        let wait = deadline.saturating_duration_since(Instant::now());
        thread::sleep(wait.min(MAX_SLEEP));
    }
    Ok(shown)
}

fn draw(
    out: &mut impl Write,
    frame: &Frame,
    index: usize,
    frame_count: usize,
    interactive: bool,
    style: &RenderStyle,
) -> Result<()> {
    if interactive {
        execute!(
            out,
            cursor::MoveTo(0, 0),
            terminal::Clear(terminal::ClearType::All)
        )?;
    }
    write!(
        out,
        "Frame {}/{}\n{}",
        index + 1,
        frame_count,
        render::render_frame(frame, style)
    )?;
    if !interactive {
        writeln!(out)?;
    }
    out.flush()?;
    Ok(())
}
