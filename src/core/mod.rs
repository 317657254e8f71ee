//! Core types and error handling for biosift.
//!
//! This module hosts the crate-wide error taxonomy and the user-facing
//! error reporting layer used by the CLI entry point.

pub mod error;

pub use error::{BiosiftError, ErrorContext, user_friendly_error};
