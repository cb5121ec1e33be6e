//! junit-merge - merge JUnit XML reports from parallel CI runs

mod cli;

use clap::Parser;
use cli::Cli;
use cli::style::Stylize;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            // --help and --version land here too
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    cli::init_tracing(cli.verbose);

    match cli::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            anstream::eprintln!("{} {e}", "error:".error());
            if e.is_write_failure() {
                anstream::eprintln!(
                    "{}",
                    "The output directory must already exist; it is not created.".muted()
                );
            }
            ExitCode::FAILURE
        }
    }
}
