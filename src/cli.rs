// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::types::ExitCodePolicy;

/// Command-line arguments for `launchseq`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "launchseq",
    version,
    about = "Run an ordered plan of blocking and detached commands.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the plan file (TOML).
    ///
    /// Default: `Launch.toml` in the current working directory if it exists,
    /// otherwise the built-in plan.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// How step results map to this process's exit code.
    ///
    /// Overrides `[config].exit_code` from the plan file.
    #[arg(long, value_enum, value_name = "POLICY")]
    pub exit_code: Option<ExitCodePolicy>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `LAUNCHSEQ_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Validate and print the plan, but don't spawn anything.
    #[arg(long)]
    pub dry_run: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
