//! File system utilities.
//!
//! The exporter writes its result through [`atomic_write`] so readers never
//! observe a partially written JSON file, even if the run is interrupted
//! mid-write.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Create a directory and all of its parents if missing.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory: {}", path.display()))?;
    }
    Ok(())
}

/// Atomically writes bytes to a file using a write-then-rename strategy.
///
/// The content is first written and synced to a sibling `.tmp` file, then
/// renamed over the target path. Parent directories are created as needed.
///
/// # Errors
///
/// Fails when the parent directory cannot be created, the temporary file
/// cannot be written or synced, or the final rename fails.
pub fn atomic_write(path: &Path, content: &[u8]) -> Result<()> {
    use std::io::Write;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_dir(parent)?;
        }
    }

    let temp_path = path.with_extension("tmp");

    {
        let mut file = fs::File::create(&temp_path)
            .with_context(|| format!("Failed to create temp file: {}", temp_path.display()))?;

        file.write_all(content)
            .with_context(|| format!("Failed to write to temp file: {}", temp_path.display()))?;

        file.sync_all().context("Failed to sync file to disk")?;
    }

    fs::rename(&temp_path, path)
        .with_context(|| format!("Failed to rename temp file to: {}", path.display()))?;

    Ok(())
}
