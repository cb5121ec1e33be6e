//! Merge engine for JUnit reports
//!
//! Split the way the rest of the crate is:
//! 1. Names - `SuiteNameRegistry` picks collision-free suite names (pure)
//! 2. Totals - `SuiteTotals` sums counters from suite attributes (pure)
//! 3. Fold - `SuiteMerger` / `merge_reports` walk parsed reports in order
//!    and build the output document (reads files)

mod fold;
mod names;
mod totals;

pub use fold::{DuplicateNames, MergeOptions, MergeOutcome, SuiteMerger, merge_reports};
pub use names::SuiteNameRegistry;
pub use totals::{format_time, parse_count, parse_time};

/// Root element of every report
pub const TESTSUITES: &str = "testsuites";

/// Element merged as a unit
pub const TESTSUITE: &str = "testsuite";
