//! Terminal styling
//!
//! Output goes through `anstream`, which strips these codes when stdout is
//! not a terminal.

use owo_colors::OwoColorize;
use std::fmt::Display;

/// Check mark for completed steps
pub const CHECK: &str = "✓";

/// Marker for skipped entries
pub const SKIP: &str = "-";

/// Semantic colours for CLI output
pub trait Stylize {
    /// De-emphasised detail text
    fn muted(&self) -> String;
    /// Headings
    fn emphasis(&self) -> String;
    /// Paths and names
    fn accent(&self) -> String;
    /// Positive outcome
    fn success(&self) -> String;
    /// Something was skipped or looks off
    fn warn(&self) -> String;
    /// Fatal problems
    fn error(&self) -> String;
}

impl<T: Display> Stylize for T {
    fn muted(&self) -> String {
        self.dimmed().to_string()
    }

    fn emphasis(&self) -> String {
        self.bold().to_string()
    }

    fn accent(&self) -> String {
        self.cyan().to_string()
    }

    fn success(&self) -> String {
        self.green().to_string()
    }

    fn warn(&self) -> String {
        self.yellow().to_string()
    }

    fn error(&self) -> String {
        self.red().bold().to_string()
    }
}

/// Green check mark
pub fn check() -> String {
    CHECK.success()
}
