//! Helpers for getting text into the model.
//!
//! Used by the interactive shell; the scoring code never touches files.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

/// Resolves `path` against the current directory when it is relative.
pub fn resolve_path<P: AsRef<Path>>(path: P) -> Result<PathBuf> {
    let path = path.as_ref();
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = std::env::current_dir().context("Failed to read the current directory")?;
    Ok(cwd.join(path))
}

/// Reads a text file for scoring.
///
/// The content is lower-cased and trimmed.
pub async fn read_text_file<P>(path: P) -> Result<String>
where
    P: AsRef<Path> + Send + Sync,
{
    let path = resolve_path(path)?;
    if !tokio::fs::metadata(&path)
        .await
        .map(|meta| meta.is_file())
        .unwrap_or(false)
    {
        bail!("The file {} does not exist", path.display());
    }

    let text = tokio::fs::read_to_string(&path)
        .await
        .with_context(|| format!("Error reading file {}", path.display()))?;
    Ok(normalize_file_text(&text))
}

pub fn normalize_file_text(text: &str) -> String {
    text.to_lowercase().trim().to_owned()
}

pub fn normalize_typed_text(text: &str) -> String {
    text.trim().to_owned()
}
