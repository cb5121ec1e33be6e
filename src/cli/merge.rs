//! Merge command - fold a directory of reports into one file

use crate::cli::context::CommandContext;
use crate::cli::style::{SKIP, Stylize, check};
use anstream::println;
use junit_merge::error::Result;
use junit_merge::merge::merge_reports;
use junit_merge::report::write_report;
use junit_merge::select::{Selection, select_files};
use std::path::Path;

/// Options for the merge command
#[derive(Debug, Clone, Default)]
pub struct MergeCommandOptions {
    /// Dry run - list what would be merged without writing
    pub dry_run: bool,
}

/// Run the merge command
pub fn run_merge(
    ctx: &CommandContext,
    directory: &Path,
    output: &Path,
    options: &MergeCommandOptions,
) -> Result<()> {
    if let Some(ref path) = ctx.config_path {
        println!("{}", format!("Using config {}", path.display()).muted());
    }

    let files = select_files(directory, &ctx.options.include, &ctx.options.exclude)?;

    if options.dry_run {
        report_merge_dry_run(&files, output);
        return Ok(());
    }

    // nothing touches `output` unless every report merged
    let outcome = merge_reports(directory, &files, ctx.options.duplicate_names)?;
    write_report(&outcome.document, output)?;

    let stats = &outcome.stats;
    if stats.files_skipped > 0 {
        println!(
            "{}",
            format!("Skipped {} empty file(s)", stats.files_skipped).warn()
        );
    }
    if stats.renamed > 0 {
        println!(
            "{}",
            format!("Renamed {} duplicate suite name(s)", stats.renamed).muted()
        );
    }
    println!("{} {}", check(), stats.to_string().muted());
    println!(
        "Found and processed {} files. Wrote merged result in '{}'.",
        stats.files_seen,
        output.display().accent()
    );

    Ok(())
}

/// Report what would be merged (dry run)
fn report_merge_dry_run(files: &Selection, output: &Path) {
    println!(
        "{} {}:",
        "Merge plan".emphasis(),
        format!("({} candidate file(s))", files.len()).muted()
    );
    println!();

    if files.is_empty() {
        println!("  {}", "No matching files".muted());
    }

    let mut merged = 0;
    for file in files {
        if file.is_empty() {
            println!(
                "  {} {} {}",
                SKIP.warn(),
                file.path.display(),
                "(empty, skipped)".muted()
            );
        } else {
            merged += 1;
            println!("  {} {}", check(), file.path.display());
        }
    }

    println!();
    println!(
        "{} file(s) would be merged into '{}'.",
        merged,
        output.display().accent()
    );
    println!("{}", "Run without --dry-run to write.".muted());
}
