//! Detects an already running instance of the artifact.
use sysinfo::{ProcessRefreshKind, ProcessesToUpdate, System, UpdateKind};
use tracing::{debug, info, warn};

use crate::error::GuardError;

/// One row of the host process table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessEntry {
    pub pid: u32,
    /// Full command line, or `None` when the host would not reveal it.
    pub command_line: Option<String>,
}

impl ProcessEntry {
    pub fn new(pid: u32, command_line: Option<&str>) -> Self {
        Self {
            pid,
            command_line: command_line.map(str::to_string),
        }
    }
}

/// Best-effort view of the processes running on this host.
pub trait ProcessTable {
    /// Lists processes visible to the current user. Individual entries may be
    /// unreadable; an `Err` means the table could not be listed at all.
    fn snapshot(&self) -> Result<Vec<ProcessEntry>, GuardError>;
}

/// Process table backed by `sysinfo`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemProcessTable;

impl ProcessTable for SystemProcessTable {
    fn snapshot(&self) -> Result<Vec<ProcessEntry>, GuardError> {
        if !sysinfo::IS_SUPPORTED_SYSTEM {
            return Err(GuardError::Unsupported);
        }

        let mut system = System::new();
        system.refresh_processes_specifics(
            ProcessesToUpdate::All,
            true,
            ProcessRefreshKind::nothing().with_cmd(UpdateKind::Always),
        );

        let entries = system
            .processes()
            .iter()
            // Linux lists each thread of a process as its own entry.
            .filter(|(_, process)| process.thread_kind().is_none())
            .map(|(pid, process)| {
                let args: Vec<String> = process
                    .cmd()
                    .iter()
                    .map(|arg| arg.to_string_lossy().into_owned())
                    .collect();
                // Kernel threads and foreign-user processes report no argv.
                let command_line = (!args.is_empty()).then(|| args.join(" "));
                ProcessEntry {
                    pid: pid.as_u32(),
                    command_line,
                }
            })
            .collect();

        Ok(entries)
    }
}

/// Substrings that identify a running instance in a command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateSignature {
    /// Marker of the launch invocation, e.g. `java -jar`.
    pub launch_token: String,
    /// File name prefix of the artifact.
    pub artifact_prefix: String,
}

impl DuplicateSignature {
    pub fn new(launch_token: impl Into<String>, artifact_prefix: impl Into<String>) -> Self {
        Self {
            launch_token: launch_token.into(),
            artifact_prefix: artifact_prefix.into(),
        }
    }

    pub fn matches(&self, command_line: &str) -> bool {
        command_line.contains(&self.launch_token)
            && command_line.contains(&self.artifact_prefix)
    }
}

/// Returns the PID of the first process other than this one whose command line
/// matches `signature`.
///
/// Unreadable entries are skipped. If the table cannot be listed the result is
/// `None` and a warning is logged.
pub fn find_running(
    table: &dyn ProcessTable,
    signature: &DuplicateSignature,
) -> Option<u32> {
    let entries = match table.snapshot() {
        Ok(entries) => entries,
        Err(err) => {
            warn!("Skipping duplicate check: {err}");
            return None;
        }
    };

    let own_pid = std::process::id();
    entries
        .iter()
        .filter(|entry| entry.pid != own_pid)
        .find_map(|entry| match entry.command_line.as_deref() {
            Some(cmd) if signature.matches(cmd) => Some(entry.pid),
            Some(_) => None,
            None => {
                debug!("Command line of pid {} is unreadable", entry.pid);
                None
            }
        })
}

/// Fail-open duplicate check: `true` only when a matching process is observed.
pub fn is_already_running(table: &dyn ProcessTable, signature: &DuplicateSignature) -> bool {
    match find_running(table, signature) {
        Some(pid) => {
            info!("Artifact already running (pid {pid})");
            true
        }
        None => false,
    }
}
