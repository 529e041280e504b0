//! `eyeframe info`

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use humansize::{format_size, DECIMAL};

use super::load_session;

/// Print a summary of a session file.
#[cfg(not(tarpaulin_include))]
pub fn handle(file: &Path) -> Result<()> {
    let session = load_session(file)?.session;
    let size = fs::metadata(file)
        .with_context(|| format!("Failed to read {}", file.display()))?
        .len();
    let lit: usize = session
        .frames
        .iter()
        .map(|frame| frame.left.count_on() + frame.right.count_on())
        .sum();

    println!("File:     {}", file.display());
    println!("Size:     {}", format_size(size, DECIMAL));
    println!("Frames:   {}", session.frames.len());
    println!(
        "Rate:     {} fps ({} ms per frame)",
        session.fps,
        session.fps.interval().as_millis()
    );
    println!("Loop:     {}", if session.looping { "yes" } else { "no" });
    println!("Duration: {:.2}s", session.duration().as_secs_f64());
    println!("Lit:      {} pixels", lit);
    Ok(())
}
