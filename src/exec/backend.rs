// src/exec/backend.rs

//! Pluggable process spawner abstraction.
//!
//! The [`Launcher`](super::Launcher) talks to a `ProcessSpawner` instead of
//! calling `tokio::process` directly. Production code uses
//! [`SystemSpawner`]; tests can swap in a spawner that records which steps
//! were dispatched without creating OS processes.

use std::future::Future;
use std::io;
use std::pin::Pin;
use std::process::{ExitStatus, Stdio};

use tokio::process::Command;
use tracing::debug;

use crate::plan::CommandSpec;
use crate::types::StdioMode;

/// How a blocking child terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChildExit {
    /// Exit code, if the child exited normally.
    pub code: Option<i32>,
    /// Terminating signal, if the child was killed (unix only).
    pub signal: Option<i32>,
}

impl ChildExit {
    pub fn code(code: i32) -> Self {
        Self {
            code: Some(code),
            signal: None,
        }
    }

    pub fn signalled(signal: i32) -> Self {
        Self {
            code: None,
            signal: Some(signal),
        }
    }
}

impl From<ExitStatus> for ChildExit {
    fn from(status: ExitStatus) -> Self {
        #[cfg(unix)]
        let signal = {
            use std::os::unix::process::ExitStatusExt;
            status.signal()
        };
        #[cfg(not(unix))]
        let signal = None;

        Self {
            code: status.code(),
            signal,
        }
    }
}

/// Trait abstracting how a step's child process is created.
///
/// Errors are plain `io::Error`s; the launcher turns them into
/// `SpawnFailure`s and keeps going.
pub trait ProcessSpawner: Send {
    /// Spawn the child and wait for it to terminate.
    fn run_to_completion<'a>(
        &'a mut self,
        spec: &'a CommandSpec,
    ) -> Pin<Box<dyn Future<Output = io::Result<ChildExit>> + Send + 'a>>;

    /// Spawn the child and return as soon as it has been started.
    fn start_detached(&mut self, spec: &CommandSpec) -> io::Result<()>;
}

/// Spawner backed by `tokio::process::Command`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemSpawner;

impl SystemSpawner {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessSpawner for SystemSpawner {
    fn run_to_completion<'a>(
        &'a mut self,
        spec: &'a CommandSpec,
    ) -> Pin<Box<dyn Future<Output = io::Result<ChildExit>> + Send + 'a>> {
        Box::pin(async move {
            let mut child = build_command(spec).spawn()?;
            debug!(step = %spec.name(), pid = ?child.id(), "blocking child started");
            let status = child.wait().await?;
            Ok(ChildExit::from(status))
        })
    }

    fn start_detached(&mut self, spec: &CommandSpec) -> io::Result<()> {
        let child = build_command(spec).spawn()?;
        debug!(step = %spec.name(), pid = ?child.id(), "detached child started");
        // Dropping the handle leaves the child running; tokio reaps it in the
        // background if it exits while we are still alive.
        drop(child);
        Ok(())
    }
}

fn build_command(spec: &CommandSpec) -> Command {
    let mut cmd = Command::new(spec.program());
    cmd.args(spec.arguments());

    if let Some(dir) = spec.working_directory() {
        cmd.current_dir(dir);
    }

    match spec.stdio() {
        StdioMode::Inherit => {
            cmd.stdin(Stdio::inherit())
                .stdout(Stdio::inherit())
                .stderr(Stdio::inherit());
        }
        StdioMode::Null => {
            cmd.stdin(Stdio::null())
                .stdout(Stdio::null())
                .stderr(Stdio::null());
        }
    }

    cmd.kill_on_drop(false);
    cmd
}
