//! jarlaunch finds the newest versioned jar in a directory, makes sure only one
//! copy of it runs, and starts it as a child process that shares the console.
//! A background thread reports the child's exit status.

/// CLI interface.
pub mod cli;

/// Configuration management.
pub mod config;

/// Error handling.
pub mod error;

/// Duplicate instance detection.
pub mod guard;

/// Launch sequence.
pub mod launcher;

/// Artifact resolution.
pub mod resolver;

/// Child process supervision.
pub mod supervisor;

/// Version parsing and ordering.
pub mod version;

#[cfg(test)]
mod test_utils;
