// src/plan.rs

//! Launch plan data model.
//!
//! A [`LaunchPlan`] is an ordered, non-empty list of [`CommandSpec`]s. Specs
//! are immutable once built; the plan is created once at startup and only
//! read during execution. Every executed step produces one [`LaunchResult`].

use std::path::{Path, PathBuf};

use crate::errors::{LaunchError, Result, SpawnFailure};
use crate::types::{LaunchMode, StdioMode};

/// One step of a launch plan: an external program plus how to run it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    name: String,
    program: String,
    arguments: Vec<String>,
    mode: LaunchMode,
    working_directory: Option<PathBuf>,
    stdio: StdioMode,
    ignore_exit_code: bool,
}

impl CommandSpec {
    /// A blocking step with no arguments, inheriting the launcher's streams.
    pub fn new(program: impl Into<String>) -> Self {
        let program = program.into();
        Self {
            name: program.clone(),
            program,
            arguments: Vec::new(),
            mode: LaunchMode::default(),
            working_directory: None,
            stdio: StdioMode::default(),
            ignore_exit_code: false,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_arg(mut self, arg: impl Into<String>) -> Self {
        self.arguments.push(arg.into());
        self
    }

    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.arguments.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn with_mode(mut self, mode: LaunchMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn detached(self) -> Self {
        self.with_mode(LaunchMode::Detached)
    }

    pub fn with_working_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_directory = Some(dir.into());
        self
    }

    pub fn with_stdio(mut self, stdio: StdioMode) -> Self {
        self.stdio = stdio;
        self
    }

    pub fn ignoring_exit_code(mut self) -> Self {
        self.ignore_exit_code = true;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn arguments(&self) -> &[String] {
        &self.arguments
    }

    pub fn mode(&self) -> LaunchMode {
        self.mode
    }

    pub fn working_directory(&self) -> Option<&Path> {
        self.working_directory.as_deref()
    }

    pub fn stdio(&self) -> StdioMode {
        self.stdio
    }

    pub fn ignore_exit_code(&self) -> bool {
        self.ignore_exit_code
    }

    /// Human-readable command line, for logs and dry-run output.
    pub fn command_line(&self) -> String {
        let mut line = self.program.clone();
        for arg in &self.arguments {
            line.push(' ');
            if arg.is_empty() || arg.contains(char::is_whitespace) {
                line.push_str(&format!("{arg:?}"));
            } else {
                line.push_str(arg);
            }
        }
        line
    }
}

/// Ordered, non-empty sequence of steps. Plan order is execution order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchPlan {
    steps: Vec<CommandSpec>,
}

impl LaunchPlan {
    pub fn new(steps: Vec<CommandSpec>) -> Result<Self> {
        if steps.is_empty() {
            return Err(LaunchError::EmptyPlan);
        }
        Ok(Self { steps })
    }

    pub fn steps(&self) -> &[CommandSpec] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always false for a constructed plan.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CommandSpec> {
        self.steps.iter()
    }
}

impl<'a> IntoIterator for &'a LaunchPlan {
    type Item = &'a CommandSpec;
    type IntoIter = std::slice::Iter<'a, CommandSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

/// Outcome of dispatching one step.
///
/// `exit_code` is `None` for detached steps, for spawn failures, and for
/// blocking children killed by a signal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchResult {
    pub name: String,
    pub mode: LaunchMode,
    pub exit_code: Option<i32>,
    pub error: Option<SpawnFailure>,
}

impl LaunchResult {
    pub fn exited(spec: &CommandSpec, exit_code: Option<i32>) -> Self {
        Self {
            name: spec.name().to_string(),
            mode: spec.mode(),
            exit_code,
            error: None,
        }
    }

    pub fn started(spec: &CommandSpec) -> Self {
        Self::exited(spec, None)
    }

    pub fn failed(spec: &CommandSpec, error: SpawnFailure) -> Self {
        Self {
            name: spec.name().to_string(),
            mode: spec.mode(),
            exit_code: None,
            error: Some(error),
        }
    }

    /// True when the step spawned and, if blocking, exited with code 0.
    pub fn is_success(&self) -> bool {
        match (self.mode, &self.error) {
            (_, Some(_)) => false,
            (LaunchMode::Detached, None) => true,
            (LaunchMode::Blocking, None) => self.exit_code == Some(0),
        }
    }
}
