//! Session filename sanitization.
//!
//! Session names typed by the user become file names, so they are
//! transliterated to ASCII and stripped of anything a common filesystem
//! would reject before the `.json` extension is added.

use std::path::{Path, PathBuf};

use deunicode::deunicode;

/// Extension given to session files.
pub const EXTENSION: &str = "json";

/// Windows reserved device names that cannot be used as filenames.
const WINDOWS_RESERVED: &[&str] = &[
    "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
    "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
];

/// Characters that are invalid in filenames on common filesystems.
const INVALID_CHARS: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Name used when nothing survives sanitization.
const FALLBACK_NAME: &str = "session";

/// Maximum filename length for most filesystems.
const MAX_FILENAME_LENGTH: usize = 255;

/// Errors raised while turning a session name into a file name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FilenameError {
    #[error("Filename too long: {length} characters (max {max})")]
    TooLong { length: usize, max: usize },
}

/// Sanitize a session name for use as a file stem.
///
/// 1. Unicode is transliterated to ASCII
/// 2. Whitespace runs and hyphen runs collapse to one hyphen
/// 3. Characters invalid on common filesystems are removed
/// 4. Leading/trailing dots, spaces and hyphens are trimmed
/// 5. Windows reserved names get a `_` prefix
/// 6. An empty result becomes `session`
pub fn sanitize(input: &str) -> String {
    let ascii = deunicode(input);

    let mut result = String::with_capacity(ascii.len());
    let mut last_was_hyphen = false;

    for c in ascii.chars() {
        if INVALID_CHARS.contains(&c) {
            continue;
        } else if c.is_whitespace() || c == '-' {
            if !last_was_hyphen {
                result.push('-');
                last_was_hyphen = true;
            }
        } else if c.is_ascii_alphanumeric() || c == '_' || c == '.' {
            result.push(c);
            last_was_hyphen = false;
        }
        // Brackets and other symbols that survived deunicode are dropped
    }

    let trimmed = result.trim_matches(|c| c == '.' || c == ' ' || c == '-');
    let name = prefix_reserved(trimmed);

    if name.is_empty() {
        FALLBACK_NAME.to_string()
    } else {
        name
    }
}

/// File name for a session: the sanitized name plus `.json`.
///
/// A trailing `.json` typed by the user is not doubled.
pub fn session_filename(name: &str) -> Result<String, FilenameError> {
    let stem = strip_extension(name.trim());
    let filename = format!("{}.{}", sanitize(stem), EXTENSION);

    if filename.len() > MAX_FILENAME_LENGTH {
        return Err(FilenameError::TooLong {
            length: filename.len(),
            max: MAX_FILENAME_LENGTH,
        });
    }
    Ok(filename)
}

/// Full path of a named session inside `directory`.
pub fn session_path(directory: &Path, name: &str) -> Result<PathBuf, FilenameError> {
    Ok(directory.join(session_filename(name)?))
}

fn strip_extension(name: &str) -> &str {
    let suffix_len = EXTENSION.len() + 1;
    match name.len().checked_sub(suffix_len) {
        Some(split)
            if name.is_char_boundary(split)
                && name[split..].eq_ignore_ascii_case(&format!(".{EXTENSION}")) =>
        {
            &name[..split]
        }
        _ => name,
    }
}

/// Prefix Windows reserved names (`CON`, `con.txt`, ...) with `_`.
fn prefix_reserved(name: &str) -> String {
    let base_name = match name.find('.') {
        Some(pos) => &name[..pos],
        None => name,
    };

    let upper = base_name.to_uppercase();
    if WINDOWS_RESERVED.contains(&upper.as_str()) {
        format!("_{}", name)
    } else {
        name.to_string()
    }
}
