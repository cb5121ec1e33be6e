//! Error types for junit-merge

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while selecting, merging or writing reports
#[derive(Error, Debug)]
pub enum Error {
    /// Source directory is missing or cannot be listed
    #[error("directory not found or not readable: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    /// A name pattern is not a valid glob
    #[error("invalid file name pattern '{pattern}': {message}")]
    InvalidPattern {
        /// The pattern as given
        pattern: String,
        /// Why it was rejected
        message: String,
    },

    /// A candidate file could not be read
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// File being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// A non-empty candidate file is not well-formed XML
    #[error("malformed XML in {}: {message}", path.display())]
    MalformedXml {
        /// Offending report
        path: PathBuf,
        /// Parser message
        message: String,
    },

    /// The merged report could not be written
    #[error("failed to write {}: {message}", path.display())]
    Write {
        /// Output path
        path: PathBuf,
        /// Cause
        message: String,
    },

    /// Config file missing, unreadable or invalid
    #[error("config error: {0}")]
    Config(String),
}

impl Error {
    /// Whether this error happened while writing the output report
    pub const fn is_write_failure(&self) -> bool {
        matches!(self, Self::Write { .. })
    }
}

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, Error>;
