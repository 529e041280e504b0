//! `eyeframe show`

use std::path::Path;

use anyhow::Result;
use eyeframe::render::{self, RenderStyle};
use eyeframe::Config;

use super::load_session;

/// Print one frame, or every frame, as text.
#[cfg(not(tarpaulin_include))]
pub fn handle(file: &Path, frame: Option<usize>) -> Result<()> {
    let config = Config::load()?;
    let style = RenderStyle::from(&config.playback);
    let session = load_session(file)?.session;

    match frame {
        Some(index) => {
            let Some(frame) = session.frames.get(index) else {
                anyhow::bail!(
                    "Frame {} out of range ({} has {} frames)",
                    index,
                    file.display(),
                    session.frames.len()
                );
            };
            print!("{}", render::render_frame(frame, &style));
        }
        None if session.frames.is_empty() => println!("No frames in {}", file.display()),
        None => print!("{}", render::render_gallery(&session.frames, &style)),
    }
    Ok(())
}
