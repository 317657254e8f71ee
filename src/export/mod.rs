//! JSON export of the filtered recipe collection.
//!
//! The output document is a single JSON object mapping package names to the
//! recipe documents exactly as parsed, with 4-space indentation and
//! non-ASCII characters preserved literally. The file is written atomically
//! so an interrupted run never leaves a truncated result behind.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Serializer;
use serde_json::ser::PrettyFormatter;

use crate::recipes::RecipeSet;
use crate::utils::fs::atomic_write;

/// Serialize the filtered collection to a JSON file at `path`.
///
/// Emits a confirmation line naming the path on success.
///
/// # Errors
///
/// Fails when a recipe cannot be represented as JSON (for example a mapping
/// with non-string keys) or when the path is not writable.
pub fn save_filtered_json(recipes: &RecipeSet, path: &Path) -> Result<()> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    recipes
        .serialize(&mut serializer)
        .with_context(|| format!("Failed to serialize filtered recipes for {}", path.display()))?;
    buf.push(b'\n');

    atomic_write(path, &buf)?;

    println!("Filtered metadata written to: {}", path.display());
    Ok(())
}
