//! Text rendering of frames for terminal output.
//!
//! Each panel row becomes a run of glyphs, with the left and right panels
//! side by side. Used by `show` for the frame gallery and by `play` for
//! the live preview.

use crate::config::PlaybackConfig;
use crate::frame::Frame;

/// Glyphs and spacing used to draw a frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderStyle {
    pub on: String,
    pub off: String,
    /// Columns of space between the panels
    pub gap: usize,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self::from(&PlaybackConfig::default())
    }
}

impl From<&PlaybackConfig> for RenderStyle {
    fn from(config: &PlaybackConfig) -> Self {
        Self {
            on: config.on_glyph.clone(),
            off: config.off_glyph.clone(),
            gap: config.panel_gap,
        }
    }
}

impl RenderStyle {
    fn push_row(&self, out: &mut String, row: &[bool]) {
        for &on in row {
            out.push_str(if on { &self.on } else { &self.off });
        }
    }
}

/// Render both panels of a frame, one line per pixel row.
pub fn render_frame(frame: &Frame, style: &RenderStyle) -> String {
    let gap = " ".repeat(style.gap);
    let mut out = String::new();

    for (left, right) in frame.left.rows().zip(frame.right.rows()) {
        style.push_row(&mut out, left);
        out.push_str(&gap);
        style.push_row(&mut out, right);
        out.push('\n');
    }
    out
}

/// Render every frame under a `Frame N` heading, separated by blank lines.
pub fn render_gallery(frames: &[Frame], style: &RenderStyle) -> String {
    frames
        .iter()
        .enumerate()
        .map(|(index, frame)| format!("Frame {}\n{}", index, render_frame(frame, style)))
        .collect::<Vec<_>>()
        .join("\n")
}
