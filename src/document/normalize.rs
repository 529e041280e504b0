//! Normalization pass for session documents.
//!
//! Legacy and hand-edited documents must load without failing, so every
//! repair happens here, in one place, and is counted in a
//! [`NormalizeReport`]:
//!
//! - Nested planes (16 rows of 16 values) are flattened row-major
//! - Planes whose flattened length is not 256 become all-zero
//! - Missing or non-array planes become all-zero
//! - `0`/`false` read as off; any other number or `true` reads as on;
//!   anything else reads as off
//! - Missing or unusable `fps` becomes 12, missing `loop` becomes `true`
//! - Missing `frames` is an empty sequence; non-object entries are blank frames

use serde_json::{Map, Value};

use super::{FrameRate, Session, DEFAULT_FPS};
use crate::frame::{BitPlane, Frame, PLANE_LEN};

/// What the normalization pass changed while decoding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizeReport {
    /// Planes stored as nested rows that were flattened
    pub flattened_planes: usize,
    /// Planes replaced by an all-zero plane (wrong length, missing, wrong type)
    pub zero_filled_planes: usize,
    /// Pixel values that were not a plain `0` or `1`
    pub coerced_values: usize,
    /// Frame entries that were not objects
    pub blank_frames: usize,
    /// `fps` was missing or unusable
    pub fps_defaulted: bool,
    /// `loop` was missing or not a boolean
    pub loop_defaulted: bool,
}

impl NormalizeReport {
    /// True when the document was already in canonical form.
    ///
    /// Defaulted header fields do not count; only frame data repairs do.
    pub fn is_clean(&self) -> bool {
        self.flattened_planes == 0
            && self.zero_filled_planes == 0
            && self.coerced_values == 0
            && self.blank_frames == 0
    }

    /// One line per kind of repair, for display.
    pub fn describe(&self) -> Vec<String> {
        let counts = [
            (self.flattened_planes, "nested plane(s) flattened"),
            (self.zero_filled_planes, "malformed plane(s) replaced with blank planes"),
            (self.coerced_values, "pixel value(s) coerced to 0/1"),
            (self.blank_frames, "non-object frame(s) replaced with blank frames"),
        ];
        let mut lines: Vec<String> = counts
            .iter()
            .filter(|(count, _)| *count > 0)
            .map(|(count, what)| format!("{} {}", count, what))
            .collect();

        if self.fps_defaulted {
            lines.push(format!("fps missing or invalid, using {}", DEFAULT_FPS));
        }
        if self.loop_defaulted {
            lines.push("loop missing or invalid, using true".to_string());
        }
        lines
    }
}

/// Short type name of a JSON value, for error messages.
pub fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Build a session from a document root, repairing whatever is malformed.
pub fn normalize_document(root: &Map<String, Value>) -> (Session, NormalizeReport) {
    let mut report = NormalizeReport::default();

    let fps = normalize_fps(root.get("fps"), &mut report);

    let looping = match root.get("loop") {
        Some(Value::Bool(looping)) => *looping,
        _ => {
            report.loop_defaulted = true;
            true
        }
    };

    let frames = match root.get("frames") {
        Some(Value::Array(entries)) => entries
            .iter()
            .map(|entry| normalize_frame(entry, &mut report))
            .collect(),
        _ => Vec::new(),
    };

    if !report.is_clean() {
        tracing::warn!(
            flattened = report.flattened_planes,
            zero_filled = report.zero_filled_planes,
            coerced = report.coerced_values,
            blank_frames = report.blank_frames,
            "normalized malformed frame data"
        );
    }

    (
        Session {
            fps,
            looping,
            frames,
        },
        report,
    )
}

/// Read the frame rate field; anything but a positive integer becomes 12.
///
/// Integer-valued floats such as `30.0` are not integers and default too.
pub fn normalize_fps(value: Option<&Value>, report: &mut NormalizeReport) -> FrameRate {
    let raw = match value {
        Some(Value::Number(n)) => n.as_i64(),
        Some(Value::String(s)) => s.trim().parse::<i64>().ok(),
        _ => None,
    };

    match raw {
        Some(fps) if fps > 0 && u32::try_from(fps).is_ok() => FrameRate::new(fps),
        _ => {
            report.fps_defaulted = true;
            FrameRate::default()
        }
    }
}

/// Read one `{left, right}` frame entry.
pub fn normalize_frame(value: &Value, report: &mut NormalizeReport) -> Frame {
    match value.as_object() {
        Some(entry) => Frame::new(
            normalize_plane(entry.get("left"), report),
            normalize_plane(entry.get("right"), report),
        ),
        None => {
            report.blank_frames += 1;
            Frame::blank()
        }
    }
}

/// Read one plane, flattening nested rows and zero-filling bad lengths.
pub fn normalize_plane(value: Option<&Value>, report: &mut NormalizeReport) -> BitPlane {
    let Some(Value::Array(items)) = value else {
        report.zero_filled_planes += 1;
        return BitPlane::new();
    };

    let flat: Vec<&Value> = if items.first().is_some_and(Value::is_array) {
        report.flattened_planes += 1;
        items
            .iter()
            .flat_map(|row| match row {
                Value::Array(cells) => cells.iter().collect::<Vec<_>>(),
                other => vec![other],
            })
            .collect()
    } else {
        items.iter().collect()
    };

    if flat.len() != PLANE_LEN {
        tracing::debug!(len = flat.len(), "plane has wrong length, zero-filling");
        report.zero_filled_planes += 1;
        return BitPlane::new();
    }

    // Canonical planes decode strictly; anything else is coerced cell by cell
    let strict: Option<Vec<u8>> = flat
        .iter()
        .map(|cell| cell.as_u64().and_then(|v| u8::try_from(v).ok()))
        .collect();
    if let Some(values) = strict {
        match BitPlane::from_bits(&values) {
            Ok(plane) => return plane,
            Err(err) => tracing::debug!(%err, "coercing non-binary plane"),
        }
    }

    BitPlane::from_bools(flat.into_iter().map(|cell| pixel_value(cell, report)))
}

fn pixel_value(cell: &Value, report: &mut NormalizeReport) -> bool {
    match cell {
        Value::Number(n) => match n.as_u64() {
            Some(0) => false,
            Some(1) => true,
            _ => {
                report.coerced_values += 1;
                n.as_f64().is_some_and(|v| v != 0.0)
            }
        },
        Value::Bool(on) => {
            report.coerced_values += 1;
            *on
        }
        _ => {
            report.coerced_values += 1;
            false
        }
    }
}
