//! Progress indicators for the corpus scan.
//!
//! Wraps the `indicatif` progress bar with consistent styling and a single
//! escape hatch for automation: setting `BIOSIFT_NO_PROGRESS` to any value
//! replaces the bar with a hidden one that silently ignores all updates.
//! `indicatif` already suppresses drawing on non-TTY streams, so piped and
//! CI output stays clean without the variable.

use indicatif::{ProgressBar as IndicatifBar, ProgressStyle as IndicatifStyle};

/// Checks if progress bars should be disabled.
fn is_progress_disabled() -> bool {
    std::env::var("BIOSIFT_NO_PROGRESS").is_ok()
}

/// A progress bar with consistent styling for the recipe scan.
///
/// # Examples
///
/// ```rust
/// use biosift_cli::utils::progress::ProgressBar;
///
/// let progress = ProgressBar::new(100);
/// progress.set_prefix("Parsing recipes");
///
/// for _ in 0..100 {
///     // process one file
///     progress.inc(1);
/// }
///
/// progress.finish_with_message("done");
/// ```
#[derive(Clone)]
pub struct ProgressBar {
    inner: IndicatifBar,
}

impl ProgressBar {
    /// Creates a new progress bar tracking `len` work units.
    ///
    /// If progress output is disabled, this creates a hidden bar that
    /// ignores all operations.
    #[must_use]
    pub fn new(len: u64) -> Self {
        let bar = if is_progress_disabled() {
            IndicatifBar::hidden()
        } else {
            let bar = IndicatifBar::new(len);
            bar.set_style(default_style());
            bar
        };
        Self { inner: bar }
    }

    /// Sets the prefix displayed before the progress bar.
    pub fn set_prefix(&self, prefix: impl Into<String>) {
        self.inner.set_prefix(prefix.into());
    }

    /// Sets the message displayed after the position counter.
    pub fn set_message(&self, msg: impl Into<String>) {
        self.inner.set_message(msg.into());
    }

    /// Increments the progress bar by the specified amount.
    pub fn inc(&self, delta: u64) {
        self.inner.inc(delta);
    }

    /// Completes the progress bar, leaving a final message on screen.
    pub fn finish_with_message(&self, msg: impl Into<String>) {
        self.inner.finish_with_message(msg.into());
    }

    /// Whether the bar is a hidden no-op instance.
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.inner.is_hidden()
    }
}

fn default_style() -> IndicatifStyle {
    IndicatifStyle::default_bar()
        .template("{prefix:.bold} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap()
        .progress_chars("━╸━")
}
