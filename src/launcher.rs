//! Resolve, guard, spawn: the launch sequence.
use tracing::debug;

use crate::{
    config::LauncherConfig,
    error::LauncherError,
    guard::{ProcessTable, SystemProcessTable, is_already_running},
    resolver::{ArtifactCandidate, resolve},
    supervisor::{LaunchHandle, launch},
};

/// Result of a successful launch sequence.
#[derive(Debug)]
pub enum LaunchOutcome {
    /// A matching process was already running; nothing was spawned.
    AlreadyRunning(ArtifactCandidate),
    /// The artifact was spawned and is being watched.
    Launched(LaunchHandle),
}

/// Runs the launch sequence against a process table.
pub struct Launcher {
    config: LauncherConfig,
    processes: Box<dyn ProcessTable>,
}

impl Launcher {
    /// Creates a launcher that inspects the real host process table.
    pub fn new(config: LauncherConfig) -> Self {
        Self::with_process_table(config, Box::new(SystemProcessTable))
    }

    pub fn with_process_table(
        config: LauncherConfig,
        processes: Box<dyn ProcessTable>,
    ) -> Self {
        Self { config, processes }
    }

    /// Finds the newest artifact and starts it unless it is already running.
    ///
    /// Returns as soon as the child has been spawned. Resolution errors abort
    /// before the process table is consulted.
    pub fn run(&self) -> Result<LaunchOutcome, LauncherError> {
        let dir = self.config.artifacts_path();
        debug!("Resolving artifact in {}", dir.display());
        let artifact = resolve(&dir, &self.config.pattern())?;

        if is_already_running(self.processes.as_ref(), &self.config.signature()) {
            return Ok(LaunchOutcome::AlreadyRunning(artifact));
        }

        let handle = launch(&self.config.launch_command(), &artifact.path)?;
        Ok(LaunchOutcome::Launched(handle))
    }
}
