// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::builtin::builtin_config;
use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::Result;

/// Load a plan file from a given path and return the raw `RawConfigFile`.
///
/// This only performs TOML deserialization; it does **not** perform semantic
/// validation. Use [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawConfigFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let config: RawConfigFile = toml::from_str(&contents)?;

    Ok(config)
}

/// Load a plan file from path, resolve relative `cwd`s against the file's
/// directory and validate it.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let path = path.as_ref();
    let mut raw_config = load_from_path(path)?;
    resolve_relative_dirs(&mut raw_config, &config_root_dir(path));
    let config = ConfigFile::try_from(raw_config)?;
    Ok(config)
}

/// Pick the plan to run.
///
/// - An explicit path must exist and be valid.
/// - Otherwise `Launch.toml` in the current directory is used if present.
/// - Otherwise the built-in plan is returned.
pub fn resolve_config(explicit: Option<&Path>) -> Result<ConfigFile> {
    resolve_config_in(explicit, Path::new("."))
}

/// Same as [`resolve_config`], looking for `Launch.toml` in `search_dir`.
pub fn resolve_config_in(explicit: Option<&Path>, search_dir: &Path) -> Result<ConfigFile> {
    if let Some(path) = explicit {
        info!(path = %path.display(), "loading launch plan");
        return load_and_validate(path);
    }

    let default_path = search_dir.join(default_config_path());
    if default_path.is_file() {
        info!(path = %default_path.display(), "loading launch plan");
        return load_and_validate(&default_path);
    }

    debug!(
        path = %default_path.display(),
        "no plan file found; using built-in plan"
    );
    builtin_config()
}

/// Default plan file: `Launch.toml` in the current working directory.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("Launch.toml")
}

/// Directory relative `cwd` values are resolved against.
///
/// - "plans/dev.toml" → "plans"
/// - "Launch.toml" (parent = "") → current directory
fn config_root_dir(config_path: &Path) -> PathBuf {
    match config_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    }
}

fn resolve_relative_dirs(cfg: &mut RawConfigFile, base: &Path) {
    for step in cfg.step.iter_mut() {
        if let Some(cwd) = step.cwd.take() {
            step.cwd = Some(if cwd.is_relative() { base.join(cwd) } else { cwd });
        }
    }
}
