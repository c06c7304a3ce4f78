#![allow(dead_code)]

use launchseq::config::{ConfigFile, ConfigSection, RawConfigFile, StepConfig};
use launchseq::types::{ExitCodePolicy, LaunchMode, StdioMode};

/// Builder for `ConfigFile` to simplify test setup.
pub struct ConfigFileBuilder {
    config: RawConfigFile,
}

impl ConfigFileBuilder {
    pub fn new() -> Self {
        Self {
            config: RawConfigFile {
                config: ConfigSection::default(),
                step: Vec::new(),
            },
        }
    }

    pub fn with_step(mut self, step: StepConfig) -> Self {
        self.config.step.push(step);
        self
    }

    pub fn with_exit_code(mut self, policy: ExitCodePolicy) -> Self {
        self.config.config.exit_code = policy;
        self
    }

    pub fn raw(self) -> RawConfigFile {
        self.config
    }

    pub fn build(self) -> ConfigFile {
        ConfigFile::try_from(self.config).expect("Failed to build valid config from builder")
    }
}

impl Default for ConfigFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `StepConfig`.
pub struct StepConfigBuilder {
    step: StepConfig,
}

impl StepConfigBuilder {
    pub fn new(program: &str) -> Self {
        Self {
            step: StepConfig {
                name: None,
                program: program.to_string(),
                args: vec![],
                mode: LaunchMode::Blocking,
                cwd: None,
                stdio: StdioMode::Inherit,
                ignore_exit_code: false,
            },
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.step.name = Some(name.to_string());
        self
    }

    pub fn arg(mut self, arg: &str) -> Self {
        self.step.args.push(arg.to_string());
        self
    }

    pub fn detached(mut self) -> Self {
        self.step.mode = LaunchMode::Detached;
        self
    }

    pub fn cwd(mut self, dir: &str) -> Self {
        self.step.cwd = Some(dir.into());
        self
    }

    pub fn stdio(mut self, stdio: StdioMode) -> Self {
        self.step.stdio = stdio;
        self
    }

    pub fn ignore_exit_code(mut self) -> Self {
        self.step.ignore_exit_code = true;
        self
    }

    pub fn build(self) -> StepConfig {
        self.step
    }
}
