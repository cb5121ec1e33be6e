//! Shared setup for CLI commands
//!
//! Resolves the config file and layers the command-line flags over it.

use super::Cli;
use junit_merge::config::discover_config;
use junit_merge::error::{Error, Result};
use junit_merge::merge::MergeOptions;
use std::env;
use std::path::PathBuf;
use tracing::debug;

/// Everything a command needs besides its positional arguments
pub struct CommandContext {
    /// Config file that was applied, if any
    pub config_path: Option<PathBuf>,
    /// Final merge options (CLI > config > defaults)
    pub options: MergeOptions,
}

impl CommandContext {
    /// Load config and resolve options for this invocation
    pub fn new(cli: &Cli) -> Result<Self> {
        let cwd = env::current_dir()
            .map_err(|e| Error::Config(format!("cannot determine working directory: {e}")))?;
        let (config, config_path) = discover_config(cli.config.as_deref(), &cwd)?;
        if let Some(ref path) = config_path {
            debug!(path = %path.display(), "using config file");
        }

        let options = config.resolve(cli.names.as_deref(), cli.ignore.as_deref(), cli.no_suffix)?;

        Ok(Self {
            config_path,
            options,
        })
    }
}
