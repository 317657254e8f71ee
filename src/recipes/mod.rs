//! Recipe corpus loading.
//!
//! A Bioconda recipes checkout is a directory of package subdirectories,
//! each optionally holding a `meta.yaml` recipe. The loader scans the fixed
//! glob `<root>/*/meta.yaml`, renders every file through the stub template
//! environment in [`render`], parses the result as YAML, and collects the
//! documents into a [`RecipeSet`] keyed by `package.name`.
//!
//! Loading is strict: any render failure, parse failure, or missing
//! `package.name` aborts the whole run with an error naming the file. If
//! two recipes resolve to the same package name the later one silently
//! overwrites the earlier; the corpus does not normally contain duplicates
//! and the original tool behaves the same way.

pub mod render;

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::BiosiftError;
use crate::utils::progress::ProgressBar;

/// One parsed recipe document.
///
/// Wraps the full YAML document so export reproduces every original field
/// verbatim. Recipes are never mutated after parsing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Recipe(serde_yaml::Value);

impl Recipe {
    /// The recipe's `package.name` field, if present and a string.
    pub fn package_name(&self) -> Option<&str> {
        self.0.get("package")?.get("name")?.as_str()
    }

    /// Lower-cased free text used for keyword matching.
    ///
    /// Concatenates `about.description` and `about.summary` with a single
    /// space; a missing `about` section or missing fields contribute empty
    /// strings rather than failing.
    pub fn search_text(&self) -> String {
        let about = self.0.get("about");
        let field = |key: &str| {
            about
                .and_then(|a| a.get(key))
                .and_then(serde_yaml::Value::as_str)
                .unwrap_or("")
        };
        format!("{} {}", field("description"), field("summary")).to_lowercase()
    }
}

/// Mapping from package name to parsed recipe.
///
/// Built once by [`load_recipes`], narrowed by the keyword filter, consumed
/// by the exporter. The ordered map keeps output deterministic.
pub type RecipeSet = BTreeMap<String, Recipe>;

/// Load every recipe under `root` into memory, keyed by `package.name`.
///
/// Scans `<root>/*/meta.yaml` (in the sorted order the glob yields),
/// renders each file with no-op build helpers, parses the result as YAML,
/// and validates that the document carries a non-empty `package.name`.
///
/// # Errors
///
/// Fails on the first unreadable file, template rendering failure, YAML
/// parse failure, or recipe missing `package.name`. Every error names the
/// offending file and chains the underlying cause.
pub fn load_recipes(root: &Path) -> Result<RecipeSet> {
    let pattern = root.join("*").join("meta.yaml");
    let paths: Vec<PathBuf> = glob::glob(&pattern.to_string_lossy())
        .with_context(|| format!("Invalid recipe search pattern: {}", pattern.display()))?
        .collect::<Result<_, _>>()
        .with_context(|| format!("Failed to scan recipe directory: {}", root.display()))?;

    tracing::debug!("found {} recipe files under {}", paths.len(), root.display());

    let progress = ProgressBar::new(paths.len() as u64);
    progress.set_prefix("Parsing recipes");

    let mut recipes = RecipeSet::new();
    for path in paths {
        let recipe = load_recipe_file(&path)?;
        // load_recipe_file guarantees a non-empty package name.
        let name = recipe.package_name().unwrap_or_default().to_string();
        tracing::debug!("parsed recipe '{}' from {}", name, path.display());
        recipes.insert(name, recipe);
        progress.inc(1);
    }

    progress.finish_with_message(format!("{} recipes loaded", recipes.len()));
    tracing::info!("loaded {} recipes from {}", recipes.len(), root.display());

    Ok(recipes)
}

/// Render, parse, and validate a single recipe file.
fn load_recipe_file(path: &Path) -> Result<Recipe> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read recipe file: {}", path.display()))?;

    let rendered = render::render_recipe(&source).map_err(|e| BiosiftError::TemplateRender {
        path: path.to_path_buf(),
        source: e,
    })?;

    let recipe: Recipe = serde_yaml::from_str(&rendered).map_err(|e| BiosiftError::YamlParse {
        path: path.to_path_buf(),
        source: e,
    })?;

    match recipe.package_name() {
        Some(name) if !name.is_empty() => Ok(recipe),
        _ => Err(BiosiftError::MissingPackageName {
            path: path.to_path_buf(),
        }
        .into()),
    }
}
