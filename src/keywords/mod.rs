//! Keyword configuration ingestion.
//!
//! The keyword list lives in a small YAML file:
//!
//! ```yaml
//! keywords:
//!   - microbiome
//!   - 16S
//!   - metagenom*
//! ```
//!
//! The top-level `keywords` key is required and must hold a sequence of
//! strings; entry order is preserved for the run.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;

use crate::core::BiosiftError;

/// Load the ordered keyword list from a YAML configuration file.
///
/// Emits a count-loaded diagnostic line on success.
///
/// # Errors
///
/// Fails when the file cannot be read or parsed, when the `keywords` key is
/// absent, or when its value is not a sequence of plain strings.
pub fn load_keywords(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read keywords file: {}", path.display()))?;

    let doc: serde_yaml::Value = serde_yaml::from_str(&text).map_err(|e| BiosiftError::YamlParse {
        path: path.to_path_buf(),
        source: e,
    })?;

    let value = doc
        .get("keywords")
        .ok_or_else(|| BiosiftError::KeywordsKeyMissing {
            path: path.to_path_buf(),
        })?;

    let entries = value
        .as_sequence()
        .ok_or_else(|| BiosiftError::KeywordsNotAList {
            path: path.to_path_buf(),
        })?;

    let keywords = entries
        .iter()
        .map(|entry| {
            entry
                .as_str()
                .map(str::to_string)
                .ok_or_else(|| BiosiftError::KeywordsNotAList {
                    path: path.to_path_buf(),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    println!(
        "Loaded {} keywords from {}",
        keywords.len().to_string().bold(),
        path.display()
    );

    Ok(keywords)
}
