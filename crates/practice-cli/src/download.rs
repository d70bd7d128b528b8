//! Saving exported documents, the terminal's stand-in for a browser download.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use practice_core::ReportDocument;

/// Writes `document` into `dir` under its suggested file name.
///
/// Exporting twice in the same week overwrites the earlier file.
pub fn save_document(document: &ReportDocument, dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {}", dir.display()))?;
    let path = dir.join(&document.filename);
    fs::write(&path, &document.bytes)
        .with_context(|| format!("Failed to write report to {}", path.display()))?;
    tracing::info!(path = %path.display(), bytes = document.len(), "Saved report");
    Ok(path)
}
