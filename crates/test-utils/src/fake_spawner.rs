use std::collections::HashMap;
use std::future::Future;
use std::io;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use launchseq::exec::{ChildExit, ProcessSpawner};
use launchseq::plan::CommandSpec;
use launchseq::types::LaunchMode;

/// What the fake does when asked to spawn a given program.
#[derive(Debug, Clone)]
pub enum FakeOutcome {
    Exit(i32),
    Signal(i32),
    SpawnError(io::ErrorKind),
}

/// A fake spawner that:
/// - records every dispatched step as `(name, mode)`, in call order
/// - answers blocking steps with exit code 0 unless a program is scripted
/// - never creates an OS process.
#[derive(Clone, Default)]
pub struct FakeSpawner {
    dispatched: Arc<Mutex<Vec<(String, LaunchMode)>>>,
    scripted: HashMap<String, FakeOutcome>,
}

impl FakeSpawner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the outcome for every step whose program is `program`.
    pub fn with_outcome(mut self, program: &str, outcome: FakeOutcome) -> Self {
        self.scripted.insert(program.to_string(), outcome);
        self
    }

    /// Shared handle to the dispatch log.
    pub fn dispatched(&self) -> Arc<Mutex<Vec<(String, LaunchMode)>>> {
        Arc::clone(&self.dispatched)
    }

    pub fn dispatched_names(&self) -> Vec<String> {
        self.dispatched
            .lock()
            .unwrap()
            .iter()
            .map(|(name, _)| name.clone())
            .collect()
    }

    fn record(&self, spec: &CommandSpec) -> FakeOutcome {
        self.dispatched
            .lock()
            .unwrap()
            .push((spec.name().to_string(), spec.mode()));
        self.scripted
            .get(spec.program())
            .cloned()
            .unwrap_or(FakeOutcome::Exit(0))
    }
}

impl ProcessSpawner for FakeSpawner {
    fn run_to_completion<'a>(
        &'a mut self,
        spec: &'a CommandSpec,
    ) -> Pin<Box<dyn Future<Output = io::Result<ChildExit>> + Send + 'a>> {
        let outcome = self.record(spec);
        Box::pin(async move {
            match outcome {
                FakeOutcome::Exit(code) => Ok(ChildExit::code(code)),
                FakeOutcome::Signal(sig) => Ok(ChildExit::signalled(sig)),
                FakeOutcome::SpawnError(kind) => Err(io::Error::new(kind, "fake spawn error")),
            }
        })
    }

    fn start_detached(&mut self, spec: &CommandSpec) -> io::Result<()> {
        match self.record(spec) {
            FakeOutcome::SpawnError(kind) => Err(io::Error::new(kind, "fake spawn error")),
            _ => Ok(()),
        }
    }
}
