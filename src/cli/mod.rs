//! Command-line layer

mod context;
mod merge;
pub mod style;

use clap::Parser;
use context::CommandContext;
use junit_merge::error::Result;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;

/// Merge JUnit XML reports from parallel CI runs into one report
#[derive(Parser, Debug)]
#[command(name = "junit-merge", version, about)]
pub struct Cli {
    /// Directory where all files ready to get merged are stored
    pub dir: PathBuf,

    /// The target file in which the merged result should be written
    pub file: PathBuf,

    /// A comma-separated list of file names to check [default: *.xml]
    #[arg(long, value_name = "LIST")]
    pub names: Option<String>,

    /// A comma-separated list of file names to ignore [default: result.xml]
    #[arg(long, value_name = "LIST")]
    pub ignore: Option<String>,

    /// Do not add suffix for test suites with duplicate names
    #[arg(long)]
    pub no_suffix: bool,

    /// List the files that would be merged without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Config file [default: ./.junit-merge.toml, then the user config dir]
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Install the stderr log subscriber
pub fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // already installed only happens in tests; keep the first one
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(false),
        )
        .try_init();
}

/// Run the command described by `cli`
pub fn run(cli: Cli) -> Result<()> {
    let ctx = CommandContext::new(&cli)?;
    let options = merge::MergeCommandOptions {
        dry_run: cli.dry_run,
    };
    merge::run_merge(&ctx, &cli.dir, &cli.file, &options)
}
