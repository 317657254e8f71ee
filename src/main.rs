//! Biosift CLI entry point
//!
//! This is the main executable for the Bioconda recipe keyword filter.
//! It handles command-line argument parsing, error display, and pipeline
//! execution.
//!
//! The CLI runs a single batch pipeline:
//! - load the keyword configuration
//! - load and render every recipe under the corpus directory
//! - filter recipes whose description/summary matches a keyword
//! - export the matches as pretty-printed JSON

use anyhow::Result;
use biosift_cli::cli;
use biosift_cli::core::error::user_friendly_error;
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Diagnostics are opt-in via RUST_LOG; user-facing output goes to stdout.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // Parse CLI arguments
    let cli = cli::Cli::parse();

    // Set up colored output for Windows
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    // Execute the pipeline
    match cli.execute() {
        Ok(()) => Ok(()),
        Err(e) => {
            // Convert to user-friendly error with context and suggestions
            let error_ctx = user_friendly_error(e);
            error_ctx.display();
            std::process::exit(1);
        }
    }
}
