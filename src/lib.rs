//! Biosift - Bioconda recipe keyword filter
//!
//! A batch utility that scans a checkout of the Bioconda recipes corpus,
//! renders each Jinja-templated `meta.yaml` with inert stand-in values,
//! indexes the parsed documents by `package.name`, keeps the recipes whose
//! `about.description` / `about.summary` text matches a configured keyword
//! list, and writes the surviving subset to a JSON file.
//!
//! # Pipeline
//!
//! The tool is a strictly sequential, single-pass pipeline:
//!
//! 1. [`keywords`] - load the keyword list from a YAML configuration file
//! 2. [`recipes`] - render and parse every `*/meta.yaml` under the corpus root
//! 3. [`filter`] - keep recipes matching at least one keyword (literal
//!    substring or per-token wildcard)
//! 4. [`export`] - serialize the filtered collection to pretty-printed JSON
//!
//! There is no persistent state, no concurrency, and no network access; the
//! whole corpus is held in memory for the duration of one run.
//!
//! # Template Rendering
//!
//! Bioconda recipes invoke build-system helper macros such as
//! `{{ compiler('c') }}` or `{{ pin_compatible('numpy') }}`. Those helpers
//! only exist inside conda-build, so the renderer stubs them out with no-op
//! functions and resolves environment lookups to empty strings. The goal is
//! a parseable YAML document, not a buildable recipe; see
//! [`recipes::render`] for the stub environment.
//!
//! # Command-Line Usage
//!
//! ```bash
//! biosift \
//!     --bioconda-path /path/to/bioconda-recipes/recipes \
//!     --keywords-file keywords.yaml \
//!     --output-file filtered_bioconda.json
//! ```
//!
//! # Core Modules
//!
//! - [`cli`] - command-line surface and pipeline wiring
//! - [`core`] - error taxonomy and user-facing error reporting
//! - [`recipes`] - recipe corpus loading, rendering, and validation
//! - [`keywords`] - keyword configuration ingestion
//! - [`filter`] - keyword matching over description/summary text
//! - [`export`] - JSON export of the filtered collection
//! - [`utils`] - file-system and progress-bar helpers

pub mod cli;
pub mod core;
pub mod export;
pub mod filter;
pub mod keywords;
pub mod recipes;
pub mod utils;
