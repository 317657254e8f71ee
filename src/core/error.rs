//! Error handling for biosift
//!
//! This module provides the error types and user-friendly error reporting for
//! the recipe filter. The error system is designed around two core principles:
//! 1. **Strongly-typed errors** for precise error handling in code
//! 2. **User-friendly messages** with actionable suggestions for CLI users
//!
//! # Architecture
//!
//! The error system consists of two main types:
//! - [`BiosiftError`] - Enumerated error types for all failure cases
//! - [`ErrorContext`] - Wrapper that adds user-friendly messages and suggestions
//!
//! # Error Categories
//!
//! Errors are organized by pipeline stage:
//! - **Recipe loading**: [`BiosiftError::TemplateRender`], [`BiosiftError::YamlParse`],
//!   [`BiosiftError::MissingPackageName`]
//! - **Keyword configuration**: [`BiosiftError::KeywordsKeyMissing`],
//!   [`BiosiftError::KeywordsNotAList`]
//! - **File system**: [`BiosiftError::Io`]
//!
//! # Propagation Policy
//!
//! Every error terminates the run immediately: there are no retries, no
//! partial-result recovery, and no per-file skip-and-continue. The original
//! triggering cause is chained via `#[source]` so diagnostics always name
//! the offending file and the underlying failure.
//!
//! Use [`user_friendly_error`] to convert any error into a colored report
//! with contextual suggestions before exiting.

use colored::Colorize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for biosift operations
///
/// Each variant represents a specific failure mode in the pipeline and
/// carries the path of the file that triggered it. Parse and render
/// failures keep the library error as a `#[source]` so the full cause
/// chain survives propagation.
#[derive(Error, Debug)]
pub enum BiosiftError {
    /// Template expansion of a recipe file failed
    ///
    /// Raised when a `meta.yaml` contains Jinja syntax the renderer cannot
    /// expand, such as unbalanced `{% ... %}` blocks or a call to a helper
    /// that is not stubbed out.
    #[error("Failed to render recipe template in {}", path.display())]
    TemplateRender {
        /// Path of the recipe file that failed to render
        path: PathBuf,
        /// The underlying template engine error
        #[source]
        source: minijinja::Error,
    },

    /// The rendered recipe text is not valid YAML
    #[error("Failed to parse YAML in {}", path.display())]
    YamlParse {
        /// Path of the file whose (rendered) content failed to parse
        path: PathBuf,
        /// The underlying YAML parser error
        #[source]
        source: serde_yaml::Error,
    },

    /// A parsed recipe document lacks a non-empty `package.name` field
    ///
    /// `package.name` is the collection key, so a recipe without one cannot
    /// be indexed and the whole run is aborted.
    #[error("Missing 'package.name' in {}", path.display())]
    MissingPackageName {
        /// Path of the recipe file missing the field
        path: PathBuf,
    },

    /// The keyword configuration file has no `keywords` key
    #[error("No 'keywords' key found in {}", path.display())]
    KeywordsKeyMissing {
        /// Path of the configuration file
        path: PathBuf,
    },

    /// The `keywords` value is not a sequence of strings
    #[error("'keywords' in {} must be a list of strings", path.display())]
    KeywordsNotAList {
        /// Path of the configuration file
        path: PathBuf,
    },

    /// Standard I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// User-friendly error context with suggestions
///
/// Wraps the failing error chain with optional details and an actionable
/// suggestion. This is the form in which errors are presented to CLI users.
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error chain
    pub error: anyhow::Error,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context with no additional suggestions or details.
    #[must_use]
    pub fn new(error: anyhow::Error) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add a suggestion for resolving the error.
    ///
    /// Suggestions should be actionable steps the user can take; they are
    /// displayed in green to draw attention.
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add additional details explaining the error.
    #[must_use]
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Display the error context to stderr with terminal colors.
    ///
    /// Prints the error in red, each chained cause in yellow, then details
    /// and suggestion when present. This is the primary way biosift presents
    /// errors in the CLI.
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        for cause in self.error.chain().skip(1) {
            eprintln!("{}: {}", "caused by".yellow(), cause);
        }

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

/// Convert any error to a user-friendly [`ErrorContext`] with actionable suggestions
///
/// This function is the entry point for converting arbitrary errors into
/// user-friendly messages for CLI display. It recognizes [`BiosiftError`]
/// variants anywhere in the chain and attaches stage-specific guidance;
/// other errors pass through with the bare cause chain.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    let (details, suggestion) = match error.downcast_ref::<BiosiftError>() {
        Some(BiosiftError::TemplateRender { .. }) => (
            Some("recipes are rendered with no-op build helpers before YAML parsing"),
            Some("check the recipe for unbalanced '{% ... %}' blocks or malformed Jinja expressions"),
        ),
        Some(BiosiftError::YamlParse { .. }) => (
            None,
            Some("inspect the rendered document for indentation errors or stray template output"),
        ),
        Some(BiosiftError::MissingPackageName { .. }) => (
            Some("recipes are indexed by their 'package.name' field"),
            Some("add a 'package.name' entry to the recipe or remove the file"),
        ),
        Some(BiosiftError::KeywordsKeyMissing { .. } | BiosiftError::KeywordsNotAList { .. }) => (
            None,
            Some("the configuration must contain a top-level 'keywords' key holding a list of strings"),
        ),
        Some(BiosiftError::Io(_)) | None => (None, None),
    };

    let mut context = ErrorContext::new(error);
    if let Some(details) = details {
        context = context.with_details(details);
    }
    if let Some(suggestion) = suggestion {
        context = context.with_suggestion(suggestion);
    }
    context
}
