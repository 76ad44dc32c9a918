use std::{error::Error, io::IsTerminal, process::ExitCode};

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use jarlaunch::{
    cli::{Cli, LogLevelArg, parse_args},
    config::load_config,
    launcher::{LaunchOutcome, Launcher},
};

fn main() -> ExitCode {
    let args = parse_args();
    setup_tracing(args.log_level);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

/// Diagnostics go to stderr; `--log-level` beats `RUST_LOG`, which beats `info`.
fn setup_tracing(level: Option<LogLevelArg>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level.as_str()),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };

    let stderr = std::io::stderr();
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(stderr.is_terminal())
        .with_writer(std::io::stderr)
        .try_init();
}

fn run(args: Cli) -> Result<(), Box<dyn Error>> {
    let mut config = load_config(args.config.as_deref())?;
    if args.root.is_some() {
        config.root = args.root;
    }

    match Launcher::new(config).run()? {
        LaunchOutcome::AlreadyRunning(artifact) => {
            info!("Not launching {}", artifact.file_name);
        }
        LaunchOutcome::Launched(handle) if args.detach => {
            info!("Detaching from pid {}", handle.pid);
        }
        // The watcher thread ends with this process.
        LaunchOutcome::Launched(handle) => {
            handle.wait();
        }
    }

    Ok(())
}
