// src/config/mod.rs

//! Launch plan configuration.
//!
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a plan file from disk, or fall back to the built-in plan
//!   (`loader.rs`, `builtin.rs`).
//! - Validate the raw file before a `LaunchPlan` is built (`validate.rs`).

pub mod builtin;
pub mod loader;
pub mod model;
pub mod validate;

pub use builtin::{builtin_config, builtin_plan};
pub use loader::{load_and_validate, load_from_path, resolve_config, resolve_config_in};
pub use model::{ConfigFile, ConfigSection, RawConfigFile, StepConfig};
pub use validate::validate_raw_config;
