//! Spawns the artifact and watches it from a background thread.
use std::{
    path::{Path, PathBuf},
    process::{Child, Command, ExitStatus, Stdio},
    thread::{self, JoinHandle},
};

use tracing::{debug, error, info, warn};

use crate::error::LauncherError;

/// Name of the exit watcher thread.
pub const WATCHER_THREAD_NAME: &str = "artifact-exit-watcher";

/// How the artifact is invoked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchCommand {
    /// Program that runs the artifact, normally `java`.
    pub interpreter: String,
    /// File name of the heap dump written next to the artifact on OOM.
    pub heap_dump_file: String,
}

impl Default for LaunchCommand {
    fn default() -> Self {
        Self {
            interpreter: "java".into(),
            heap_dump_file: "heapdump.hprof".into(),
        }
    }
}

impl LaunchCommand {
    /// Arguments passed to the interpreter for `artifact`.
    pub fn args(&self, artifact: &Path) -> Vec<String> {
        let dump_dir = artifact.parent().unwrap_or_else(|| Path::new("."));
        vec![
            "-XX:+HeapDumpOnOutOfMemoryError".into(),
            format!(
                "-XX:HeapDumpPath={}",
                dump_dir.join(&self.heap_dump_file).display()
            ),
            "-jar".into(),
            artifact.display().to_string(),
        ]
    }

    fn build(&self, artifact: &Path) -> Command {
        let mut cmd = Command::new(&self.interpreter);
        cmd.args(self.args(artifact))
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        cmd
    }
}

/// A started artifact process.
#[derive(Debug)]
pub struct LaunchHandle {
    pub pid: u32,
    pub artifact: PathBuf,
    /// Exit watcher; joining it yields the exit status it observed.
    /// `None` if the watcher thread could not be started.
    pub watcher: Option<JoinHandle<Option<ExitStatus>>>,
}

impl LaunchHandle {
    /// Blocks until the watcher has observed the child exit.
    pub fn wait(self) -> Option<ExitStatus> {
        self.watcher?.join().ok().flatten()
    }
}

/// Starts `artifact` with inherited console I/O and returns without waiting.
///
/// The child outlives the launcher; nothing here ever kills it.
pub fn launch(
    command: &LaunchCommand,
    artifact: &Path,
) -> Result<LaunchHandle, LauncherError> {
    info!("Launching artifact from: {}", artifact.display());

    let child = command
        .build(artifact)
        .spawn()
        .map_err(|source| LauncherError::Spawn {
            program: command.interpreter.clone(),
            source,
        })?;
    let pid = child.id();
    debug!("Artifact running with pid {pid}");

    let watcher = thread::Builder::new()
        .name(WATCHER_THREAD_NAME.into())
        .spawn(move || watch(child))
        .map_err(|err| error!("Failed to start exit watcher for pid {pid}: {err}"))
        .ok();

    Ok(LaunchHandle {
        pid,
        artifact: artifact.to_path_buf(),
        watcher,
    })
}

fn watch(mut child: Child) -> Option<ExitStatus> {
    let pid = child.id();
    match child.wait() {
        Ok(status) => {
            report_exit(pid, status);
            Some(status)
        }
        Err(err) => {
            error!("Stopped waiting for artifact process {pid}: {err}");
            None
        }
    }
}

fn report_exit(pid: u32, status: ExitStatus) {
    match status.code() {
        Some(0) => info!("Artifact process {pid} exited with code 0"),
        Some(code) => warn!("Artifact process {pid} exited with code {code}"),
        None => warn!(
            "Artifact process {pid} was terminated by {}",
            describe_signal(status)
        ),
    }
}

#[cfg(unix)]
fn describe_signal(status: ExitStatus) -> String {
    use std::os::unix::process::ExitStatusExt;

    match status.signal() {
        Some(raw) => match nix::sys::signal::Signal::try_from(raw) {
            Ok(signal) => signal.as_str().to_string(),
            Err(_) => format!("signal {raw}"),
        },
        None => "an unknown cause".into(),
    }
}

#[cfg(not(unix))]
fn describe_signal(_status: ExitStatus) -> String {
    "an unknown cause".into()
}
