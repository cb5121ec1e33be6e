//! Core types for junit-merge

use std::fmt;
use std::path::PathBuf;

/// A candidate report found by the file selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportFile {
    /// Path to the file (as walked, not canonicalized)
    pub path: PathBuf,
    /// Size in bytes at selection time
    pub size: u64,
}

impl ReportFile {
    /// Zero-byte files are left behind by crashed shards and are skipped
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Base name used for ordering
    pub fn file_name(&self) -> &str {
        self.path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
    }
}

/// Summed counters of merged suites
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SuiteTotals {
    /// Sum of `tests`
    pub tests: i64,
    /// Sum of `assertions`
    pub assertions: i64,
    /// Sum of `failures`
    pub failures: i64,
    /// Sum of `errors`
    pub errors: i64,
    /// Sum of `time`, in seconds
    pub time: f64,
}

/// Bookkeeping for one merge run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MergeStats {
    /// Candidate files handed to the merger, empty ones included
    pub files_seen: usize,
    /// Files that were parsed and folded in
    pub files_merged: usize,
    /// Zero-byte files that were skipped
    pub files_skipped: usize,
    /// Suites appended to the envelope
    pub suites: usize,
    /// Suites whose name was changed to avoid a collision
    pub renamed: usize,
    /// Final counters written on the envelope
    pub totals: SuiteTotals,
}

impl fmt::Display for MergeStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} suites, {} tests, {} failures, {} errors, {}s",
            self.suites,
            self.totals.tests,
            self.totals.failures,
            self.totals.errors,
            crate::merge::format_time(self.totals.time)
        )
    }
}
