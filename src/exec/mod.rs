// src/exec/mod.rs

//! Process execution layer.
//!
//! - [`launcher`] walks a `LaunchPlan` in order and collects `LaunchResult`s.
//! - [`backend`] provides the `ProcessSpawner` trait and the
//!   `tokio::process`-based `SystemSpawner` used in production. Tests replace
//!   it with a fake that does not create processes.

pub mod backend;
pub mod launcher;

pub use backend::{ChildExit, ProcessSpawner, SystemSpawner};
pub use launcher::Launcher;
