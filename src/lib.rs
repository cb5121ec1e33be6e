//! junit-merge - merge JUnit XML reports into one
//!
//! Parallel CI shards each emit their own `<testsuites>` report. This crate
//! folds every `<testsuite>` found in a directory of such reports into a
//! single envelope suite, renaming colliding suite names and summing the
//! `tests`, `assertions`, `failures`, `errors` and `time` counters.
//!
//! The pipeline is select → parse → merge → write:
//!
//! ```no_run
//! use junit_merge::merge::MergeOptions;
//! use junit_merge::select::NamePatterns;
//! use std::path::Path;
//!
//! let options = MergeOptions {
//!     include: NamePatterns::parse_list("*.xml,junit-*.xml")?,
//!     ..MergeOptions::defaults()?
//! };
//! let outcome = junit_merge::run(Path::new("build/reports"), Path::new("result.xml"), &options)?;
//! println!("merged {} suites", outcome.stats.suites);
//! # Ok::<(), junit_merge::error::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod merge;
pub mod report;
pub mod select;
pub mod types;
pub mod xml;

use crate::error::Result;
use crate::merge::{MergeOptions, MergeOutcome, merge_reports};
use std::path::Path;

/// Select, merge and write in one call.
///
/// Nothing is written unless every candidate file merged cleanly.
pub fn run(directory: &Path, output: &Path, options: &MergeOptions) -> Result<MergeOutcome> {
    let files = select::select_files(directory, &options.include, &options.exclude)?;
    let outcome = merge_reports(directory, &files, options.duplicate_names)?;
    report::write_report(&outcome.document, output)?;
    Ok(outcome)
}
