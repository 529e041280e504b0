//! `eyeframe normalize`

use std::path::Path;

use anyhow::{Context, Result};
use eyeframe::document;

/// Rewrite a session file in canonical flat form.
#[cfg(not(tarpaulin_include))]
pub fn handle(file: &Path, output: Option<&Path>) -> Result<()> {
    if !file.exists() {
        anyhow::bail!("File not found: {}", file.display());
    }
    let decoded = document::load(file)
        .with_context(|| format!("Failed to load session {}", file.display()))?;
    let target = output.unwrap_or(file);

    let repairs = decoded.report.describe();
    if repairs.is_empty() {
        println!("{} is already in canonical form", file.display());
    } else {
        println!("Repaired {}:", file.display());
        for line in &repairs {
            println!("  - {}", line);
        }
    }

    document::save(&decoded.session, target)
        .with_context(|| format!("Failed to write {}", target.display()))?;
    println!(
        "Wrote {} frames to {}",
        decoded.session.frames.len(),
        target.display()
    );
    Ok(())
}
