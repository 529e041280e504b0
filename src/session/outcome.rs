//! Save operation results.

use std::path::PathBuf;

/// The result of a save-if-dirty request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Pending changes were written to the bound file
    Saved(PathBuf),
    /// No file is bound, or nothing changed since the last save
    NothingToSave,
}

impl SaveOutcome {
    /// User-friendly message describing what happened.
    pub fn message(&self) -> String {
        match self {
            Self::Saved(path) => format!("Saved changes to {}", path.display()),
            Self::NothingToSave => "No changes to save".to_string(),
        }
    }

    /// Whether anything was written.
    pub fn is_saved(&self) -> bool {
        matches!(self, Self::Saved(_))
    }
}
