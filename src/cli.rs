//! Command-line interface for jarlaunch.
use std::{path::PathBuf, str::FromStr};

use clap::Parser;
use tracing::level_filters::LevelFilter;

/// Accepted spellings for each level, indexed by their numeric shorthand.
const LEVELS: [(LevelFilter, &[&str]); 6] = [
    (LevelFilter::OFF, &["off"]),
    (LevelFilter::ERROR, &["error", "err"]),
    (LevelFilter::WARN, &["warn", "warning"]),
    (LevelFilter::INFO, &["info"]),
    (LevelFilter::DEBUG, &["debug"]),
    (LevelFilter::TRACE, &["trace"]),
];

/// Log verbosity given either by name ("info", "debug", ...) or as 0-5.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LogLevelArg(LevelFilter);

impl LogLevelArg {
    /// Directive suitable for an `EnvFilter`.
    pub fn as_str(&self) -> &'static str {
        LEVELS
            .iter()
            .find(|(level, _)| *level == self.0)
            .map_or("info", |(_, names)| names[0])
    }
}

impl FromStr for LogLevelArg {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let wanted = value.trim().to_ascii_lowercase();
        if wanted.is_empty() {
            return Err("log level cannot be empty".into());
        }

        let found = match wanted.parse::<usize>() {
            Ok(index) => LEVELS.get(index).ok_or_else(|| {
                format!("unsupported log level number '{index}' (expected 0-5)")
            })?,
            Err(_) => LEVELS
                .iter()
                .find(|(_, names)| names.contains(&wanted.as_str()))
                .ok_or_else(|| format!("invalid log level '{}'", value.trim()))?,
        };

        Ok(LogLevelArg(found.0))
    }
}

/// Command-line interface for jarlaunch.
#[derive(Debug, Parser)]
#[command(name = "jarlaunch", version, author)]
#[command(
    about = "Launches the newest versioned jar unless it is already running",
    long_about = None
)]
pub struct Cli {
    /// Path to a YAML config file (defaults to ./jarlaunch.yaml if present).
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Base directory the artifacts directory is resolved against.
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Override the logging verbosity for this invocation only.
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<LogLevelArg>,

    /// Exit right after spawning instead of staying to report the exit code.
    #[arg(long)]
    pub detach: bool,
}

/// Parses command-line arguments.
pub fn parse_args() -> Cli {
    Cli::parse()
}
