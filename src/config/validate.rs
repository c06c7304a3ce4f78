// src/config/validate.rs

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{LaunchError, Result};
use crate::plan::LaunchPlan;

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = crate::errors::LaunchError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        let steps = raw.step.iter().map(|s| s.to_command_spec()).collect();
        let plan = LaunchPlan::new(steps)?;
        Ok(ConfigFile::new_unchecked(raw.config, plan))
    }
}

/// Check a raw plan file without building the plan.
///
/// This checks:
/// - there is at least one `[[step]]`
/// - every `program` is non-blank
/// - explicit `name`s are non-blank
///
/// It does **not** check that programs exist; resolution happens when the
/// step is spawned and a missing program is a per-step `SpawnFailure`.
pub fn validate_raw_config(cfg: &RawConfigFile) -> Result<()> {
    ensure_has_steps(cfg)?;
    validate_steps(cfg)?;
    Ok(())
}

fn ensure_has_steps(cfg: &RawConfigFile) -> Result<()> {
    if cfg.step.is_empty() {
        return Err(LaunchError::EmptyPlan);
    }
    Ok(())
}

fn validate_steps(cfg: &RawConfigFile) -> Result<()> {
    for (idx, step) in cfg.step.iter().enumerate() {
        if step.program.trim().is_empty() {
            return Err(LaunchError::ConfigError(format!(
                "step #{} has an empty `program`",
                idx + 1
            )));
        }
        if let Some(ref name) = step.name {
            if name.trim().is_empty() {
                return Err(LaunchError::ConfigError(format!(
                    "step #{} ('{}') has an empty `name`",
                    idx + 1,
                    step.program
                )));
            }
        }
    }
    Ok(())
}
