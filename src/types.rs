use serde::Deserialize;

/// Whether the launcher waits for a step's child process.
///
/// - `Blocking`: suspend dispatch until the child exits.
/// - `Detached`: start the child and move on immediately; the child's
///   termination is never observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LaunchMode {
    Blocking,
    Detached,
}

impl Default for LaunchMode {
    fn default() -> Self {
        LaunchMode::Blocking
    }
}

/// What a child does with stdin/stdout/stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StdioMode {
    /// Share the launcher's streams (the terminal).
    Inherit,
    /// Redirect all three streams to the null device.
    Null,
}

impl Default for StdioMode {
    fn default() -> Self {
        StdioMode::Inherit
    }
}

/// How step results are folded into the launcher's own exit code.
///
/// Read from `[config].exit_code` via serde and from `--exit-code` via clap;
/// both use the kebab-case names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ExitCodePolicy {
    /// Exit 0 once every step has been dispatched, whatever happened.
    AlwaysSuccess,
    /// Exit with the highest code among steps not marked `ignore_exit_code`.
    Worst,
}

impl Default for ExitCodePolicy {
    fn default() -> Self {
        ExitCodePolicy::AlwaysSuccess
    }
}
