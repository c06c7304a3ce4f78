// src/exec/launcher.rs

//! Sequential plan execution.

use tracing::{debug, warn};

use crate::errors::SpawnFailure;
use crate::plan::{CommandSpec, LaunchPlan, LaunchResult};
use crate::types::LaunchMode;

use super::backend::{ProcessSpawner, SystemSpawner};

/// Runs a [`LaunchPlan`] one step at a time.
///
/// - Blocking steps are awaited before the next step is dispatched.
/// - Detached steps are started and immediately left alone.
/// - A step that fails to spawn is recorded and the plan carries on.
///
/// Progress is logged at `debug`; only failures reach `warn`. Printing the
/// outcome is left to the caller.
pub struct Launcher<S: ProcessSpawner = SystemSpawner> {
    spawner: S,
}

impl Launcher<SystemSpawner> {
    pub fn system() -> Self {
        Self::new(SystemSpawner::new())
    }
}

impl<S: ProcessSpawner> Launcher<S> {
    pub fn new(spawner: S) -> Self {
        Self { spawner }
    }

    pub fn spawner(&self) -> &S {
        &self.spawner
    }

    /// Dispatch every step in plan order and return one result per step.
    ///
    /// Returns once the last step has been dispatched; detached children may
    /// still be running.
    pub async fn run(&mut self, plan: &LaunchPlan) -> Vec<LaunchResult> {
        let total = plan.len();
        let mut results = Vec::with_capacity(total);

        for (idx, spec) in plan.iter().enumerate() {
            debug!(
                step = %spec.name(),
                index = idx + 1,
                total,
                mode = ?spec.mode(),
                cmd = %spec.command_line(),
                "dispatching step"
            );

            let result = match spec.mode() {
                LaunchMode::Blocking => self.run_blocking(spec).await,
                LaunchMode::Detached => self.run_detached(spec),
            };
            results.push(result);
        }

        debug!(steps = total, "launch plan dispatched");
        results
    }

    async fn run_blocking(&mut self, spec: &CommandSpec) -> LaunchResult {
        match self.spawner.run_to_completion(spec).await {
            Ok(exit) => {
                match (exit.code, exit.signal) {
                    (Some(0), _) => debug!(step = %spec.name(), exit_code = 0, "step exited"),
                    (Some(code), _) => {
                        warn!(step = %spec.name(), exit_code = code, "step exited with failure")
                    }
                    (None, signal) => {
                        warn!(step = %spec.name(), ?signal, "step terminated by signal")
                    }
                }
                LaunchResult::exited(spec, exit.code)
            }
            Err(err) => {
                let failure = SpawnFailure::from_io(spec.program(), &err);
                warn!(step = %spec.name(), error = %failure, "step could not be run");
                LaunchResult::failed(spec, failure)
            }
        }
    }

    fn run_detached(&mut self, spec: &CommandSpec) -> LaunchResult {
        match self.spawner.start_detached(spec) {
            Ok(()) => {
                debug!(step = %spec.name(), "detached step started");
                LaunchResult::started(spec)
            }
            Err(err) => {
                let failure = SpawnFailure::from_io(spec.program(), &err);
                warn!(step = %spec.name(), error = %failure, "detached step could not be started");
                LaunchResult::failed(spec, failure)
            }
        }
    }
}
