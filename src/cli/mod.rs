//! Command-line interface for biosift.
//!
//! The CLI is a single command wiring the pipeline stages together:
//! keyword configuration, corpus loading, keyword filtering, JSON export.
//! The stages run strictly in sequence and the first failure aborts the
//! run with a nonzero exit code.
//!
//! # Usage
//!
//! ```bash
//! biosift \
//!     --bioconda-path /path/to/bioconda-recipes/recipes \
//!     --keywords-file keywords.yaml \
//!     --output-file filtered_bioconda.json
//! ```
//!
//! There are no further flags. Logging verbosity is controlled through
//! `RUST_LOG` and progress-bar suppression through `BIOSIFT_NO_PROGRESS`.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::export::save_filtered_json;
use crate::filter::filter_by_keywords;
use crate::keywords::load_keywords;
use crate::recipes::load_recipes;

/// Main CLI structure for biosift.
///
/// Uses the `clap` derive API to generate parsing, help text, and
/// validation for the three required arguments.
#[derive(Parser, Debug)]
#[command(
    name = "biosift",
    about = "Filter Bioconda recipes by keyword and export the matches to JSON",
    version,
    author,
    long_about = "Scans a Bioconda recipes checkout, renders each meta.yaml with inert \
                  stand-in values for conda-build helpers, keeps the recipes whose \
                  description or summary matches a configured keyword list, and writes \
                  the matching subset to a JSON file."
)]
pub struct Cli {
    /// Path to the Bioconda recipes directory
    /// (e.g., /path/to/bioconda-recipes/recipes).
    ///
    /// Every `<subdirectory>/meta.yaml` below this directory is loaded.
    #[arg(long, value_name = "DIR")]
    bioconda_path: PathBuf,

    /// Path to the YAML file holding the keyword list.
    ///
    /// The file must contain a top-level `keywords` key with a sequence of
    /// strings; entries may use `*` for per-word wildcard matching.
    #[arg(long, value_name = "FILE")]
    keywords_file: PathBuf,

    /// Path to the output JSON file (e.g., filtered_bioconda.json).
    #[arg(long, value_name = "FILE")]
    output_file: PathBuf,
}

impl Cli {
    /// Run the pipeline: load keywords, load recipes, filter, export.
    ///
    /// # Errors
    ///
    /// Propagates the first failure from any stage; the caller is expected
    /// to render it via [`crate::core::error::user_friendly_error`].
    pub fn execute(self) -> Result<()> {
        let keywords = load_keywords(&self.keywords_file)?;
        let recipes = load_recipes(&self.bioconda_path)?;
        let filtered = filter_by_keywords(&recipes, &keywords, true);
        save_filtered_json(&filtered, &self.output_file)
    }
}
