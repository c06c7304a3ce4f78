// src/errors.rs

//! Crate-wide error types.
//!
//! `LaunchError` covers everything that can go wrong *before* a plan is
//! dispatched (loading and validating the plan). Once dispatch starts, step
//! failures are recorded as [`SpawnFailure`] values inside each
//! `LaunchResult` instead of being returned as errors.

use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LaunchError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("launch plan must contain at least one step")]
    EmptyPlan,

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, LaunchError>;

/// The OS could not create (or confirm) the child process for a step.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("failed to spawn '{program}': {message}")]
pub struct SpawnFailure {
    pub program: String,
    pub kind: io::ErrorKind,
    pub message: String,
}

impl SpawnFailure {
    pub fn from_io(program: impl Into<String>, err: &io::Error) -> Self {
        Self {
            program: program.into(),
            kind: err.kind(),
            message: err.to_string(),
        }
    }

    /// Shell-style exit code for this failure (127 not found, 126 not
    /// executable, 1 otherwise).
    pub fn exit_code(&self) -> i32 {
        match self.kind {
            io::ErrorKind::NotFound => 127,
            io::ErrorKind::PermissionDenied => 126,
            _ => 1,
        }
    }
}
