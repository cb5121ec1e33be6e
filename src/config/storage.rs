//! Locating and reading config files

use super::MergeConfig;
use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Project config file, looked up in the working directory
pub const CONFIG_FILE: &str = ".junit-merge.toml";

/// Directory under the user config dir
const USER_CONFIG_DIR: &str = "junit-merge";

/// File name inside [`USER_CONFIG_DIR`]
const USER_CONFIG_FILE: &str = "config.toml";

/// Per-user config path, e.g. `~/.config/junit-merge/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(USER_CONFIG_DIR).join(USER_CONFIG_FILE))
}

/// Pick the config file to use.
///
/// An explicit path must exist. Otherwise the project file in `cwd` wins
/// over the per-user file; `None` means built-in defaults.
pub fn find_config(explicit: Option<&Path>, cwd: &Path) -> Result<Option<PathBuf>> {
    if let Some(path) = explicit {
        if !path.is_file() {
            return Err(Error::Config(format!(
                "config file not found: {}",
                path.display()
            )));
        }
        return Ok(Some(path.to_path_buf()));
    }

    let project = cwd.join(CONFIG_FILE);
    if project.is_file() {
        return Ok(Some(project));
    }

    Ok(user_config_path().filter(|path| path.is_file()))
}

/// Read and parse one config file
pub fn load_config(path: &Path) -> Result<MergeConfig> {
    let content = fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("failed to read {}: {e}", path.display())))?;

    let config: MergeConfig = toml::from_str(&content)
        .map_err(|e| Error::Config(format!("failed to parse {}: {e}", path.display())))?;

    debug!(path = %path.display(), "loaded config");
    Ok(config)
}

/// [`find_config`] then [`load_config`]; defaults when no file is found
pub fn discover_config(explicit: Option<&Path>, cwd: &Path) -> Result<(MergeConfig, Option<PathBuf>)> {
    match find_config(explicit, cwd)? {
        Some(path) => Ok((load_config(&path)?, Some(path))),
        None => Ok((MergeConfig::default(), None)),
    }
}
