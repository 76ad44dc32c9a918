//! Error handling for jarlaunch.
use std::path::PathBuf;

use thiserror::Error;

/// Defines all fatal errors that can abort a launch attempt.
#[derive(Debug, Error)]
pub enum LauncherError {
    /// The artifacts directory is missing or unreadable.
    #[error("Failed to read artifacts directory '{}': {source}", .path.display())]
    Filesystem {
        /// The directory that could not be read.
        path: PathBuf,
        /// The underlying error that occurred.
        #[source]
        source: std::io::Error,
    },

    /// No file in the directory matched the artifact pattern.
    #[error("No artifact matching '{pattern}' found in '{}'", .dir.display())]
    NoArtifactFound {
        /// The directory that was scanned.
        dir: PathBuf,
        /// Human-readable pattern (e.g. `bot-*.jar`).
        pattern: String,
    },

    /// A matching file carried a version segment that is not numeric.
    #[error("Invalid version '{version}' in artifact '{file}': {reason}")]
    VersionParse {
        /// File name the version was taken from.
        file: String,
        /// The raw version segment.
        version: String,
        /// Why the segment was rejected.
        reason: VersionError,
    },

    /// The OS refused to start the child process.
    #[error("Failed to start '{program}': {source}")]
    Spawn {
        /// The program that was invoked.
        program: String,
        /// The underlying error that occurred.
        #[source]
        source: std::io::Error,
    },

    /// Error reading the configuration file or expanding its variables.
    #[error("Failed to load config: {0}")]
    Config(String),

    /// Error parsing YAML configuration.
    #[error("Invalid YAML format: {0}")]
    ConfigParse(#[from] serde_yaml::Error),
}

/// Reasons a version string can be rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionError {
    /// A component between dots is empty.
    #[error("empty component at position {0}")]
    EmptyComponent(usize),

    /// A component contains something other than ASCII digits.
    #[error("non-numeric component '{0}'")]
    NonNumeric(String),

    /// A component does not fit in 64 bits.
    #[error("component '{0}' is out of range")]
    Overflow(String),
}

/// Non-fatal failures of process-table introspection.
#[derive(Debug, Error)]
pub enum GuardError {
    /// The host exposes no process list this build can read.
    #[error("process enumeration is not supported on this platform")]
    Unsupported,

    /// Enumeration was attempted and failed.
    #[error("process enumeration failed: {0}")]
    Enumeration(String),
}
