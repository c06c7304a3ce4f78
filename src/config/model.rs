// src/config/model.rs

use std::path::PathBuf;

use serde::Deserialize;

use crate::plan::{CommandSpec, LaunchPlan};
use crate::types::{ExitCodePolicy, LaunchMode, StdioMode};

/// Top-level plan file as read from TOML, before validation.
///
/// ```toml
/// [config]
/// exit_code = "worst"
///
/// [[step]]
/// name = "build"
/// program = "cargo"
/// args = ["build", "--features", "bevy/dynamic_linking"]
///
/// [[step]]
/// program = "kitty"
/// args = ["--hold", "sh", "-c", "cargo run --bin client"]
/// mode = "detached"
/// ```
///
/// Steps run in the order they appear in the file. Unknown keys are
/// rejected, so a misspelt `mode` cannot silently turn into `blocking`.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct RawConfigFile {
    /// Global behaviour from `[config]`.
    #[serde(default)]
    pub config: ConfigSection,

    /// All `[[step]]` entries, in file order.
    #[serde(default)]
    pub step: Vec<StepConfig>,
}

/// `[config]` section.
#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigSection {
    /// `"always-success"` (default) or `"worst"`.
    #[serde(default)]
    pub exit_code: ExitCodePolicy,
}

/// One `[[step]]` entry.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct StepConfig {
    /// Display label; defaults to `program`.
    #[serde(default)]
    pub name: Option<String>,

    /// Executable name (resolved via `PATH`) or path.
    pub program: String,

    #[serde(default)]
    pub args: Vec<String>,

    /// `"blocking"` (default) or `"detached"`.
    #[serde(default)]
    pub mode: LaunchMode,

    /// Working directory. Relative paths are resolved against the directory
    /// containing the plan file.
    #[serde(default)]
    pub cwd: Option<PathBuf>,

    /// `"inherit"` (default) or `"null"`.
    #[serde(default)]
    pub stdio: StdioMode,

    /// Leave this step out of the `worst` exit-code computation.
    #[serde(default)]
    pub ignore_exit_code: bool,
}

impl StepConfig {
    pub fn to_command_spec(&self) -> CommandSpec {
        let mut spec = CommandSpec::new(self.program.clone())
            .with_args(self.args.iter().cloned())
            .with_mode(self.mode)
            .with_stdio(self.stdio);

        if let Some(ref name) = self.name {
            spec = spec.with_name(name.clone());
        }
        if let Some(ref cwd) = self.cwd {
            spec = spec.with_working_directory(cwd.clone());
        }
        if self.ignore_exit_code {
            spec = spec.ignoring_exit_code();
        }
        spec
    }
}

/// A validated plan file. Construct via `ConfigFile::try_from(raw)` or the
/// loader functions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigFile {
    pub config: ConfigSection,
    pub plan: LaunchPlan,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(config: ConfigSection, plan: LaunchPlan) -> Self {
        Self { config, plan }
    }
}
