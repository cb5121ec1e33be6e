//! Optional defaults file
//!
//! A `.junit-merge.toml` can pin the name filters and suffix policy for a
//! project so CI scripts don't have to repeat them:
//!
//! ```toml
//! names = ["TEST-*.xml", "junit-*.xml"]
//! ignore = ["result.xml", "flaky.xml"]
//! no_suffix = false
//! ```
//!
//! Command-line flags always win over the file.

mod storage;

pub use storage::{CONFIG_FILE, discover_config, find_config, load_config, user_config_path};

use crate::error::Result;
use crate::merge::{DuplicateNames, MergeOptions};
use crate::select::{DEFAULT_EXCLUDE, DEFAULT_INCLUDE, NamePatterns};
use serde::Deserialize;

/// Contents of a config file; every key is optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MergeConfig {
    /// File name patterns to include
    pub names: Option<Vec<String>>,
    /// File name patterns to ignore
    pub ignore: Option<Vec<String>>,
    /// Keep duplicate suite names instead of suffixing them
    pub no_suffix: Option<bool>,
}

impl MergeConfig {
    /// Layer command-line values over this config.
    ///
    /// `names` and `ignore` are comma-separated lists as typed on the
    /// command line. `--no-suffix` can only switch suffixing off.
    pub fn resolve(
        &self,
        names: Option<&str>,
        ignore: Option<&str>,
        no_suffix: bool,
    ) -> Result<MergeOptions> {
        let include = match (names, &self.names) {
            (Some(list), _) => NamePatterns::parse_list(list)?,
            (None, Some(list)) => NamePatterns::new(list)?,
            (None, None) => NamePatterns::parse_list(DEFAULT_INCLUDE)?,
        };
        let exclude = match (ignore, &self.ignore) {
            (Some(list), _) => NamePatterns::parse_list(list)?,
            (None, Some(list)) => NamePatterns::new(list)?,
            (None, None) => NamePatterns::parse_list(DEFAULT_EXCLUDE)?,
        };
        let duplicate_names = if no_suffix || self.no_suffix == Some(true) {
            DuplicateNames::Keep
        } else {
            DuplicateNames::Suffix
        };

        Ok(MergeOptions {
            include,
            exclude,
            duplicate_names,
        })
    }
}
