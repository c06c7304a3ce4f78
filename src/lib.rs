// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod exec;
pub mod logging;
pub mod plan;
pub mod report;
pub mod types;

use std::path::Path;

use tracing::debug;

use crate::cli::CliArgs;
use crate::config::resolve_config_in;
use crate::errors::Result;
use crate::exec::Launcher;

/// Process exit code when the plan could not be loaded, so nothing ran.
pub const SETUP_ERROR_EXIT_CODE: i32 = 2;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - plan loading (file or built-in)
/// - dry-run printing
/// - sequential dispatch via the system spawner
/// - the per-step summary
///
/// Returns the exit code the process should terminate with. Errors are only
/// returned for problems found before any step is dispatched.
pub async fn run(args: CliArgs) -> Result<i32> {
    run_in(args, Path::new(".")).await
}

/// Same as [`run`], looking for `Launch.toml` in `search_dir` when no
/// `--config` is given.
pub async fn run_in(args: CliArgs, search_dir: &Path) -> Result<i32> {
    let cfg = resolve_config_in(args.config.as_deref(), search_dir)?;
    let policy = args.exit_code.unwrap_or(cfg.config.exit_code);

    if args.dry_run {
        report::print_dry_run(&cfg, policy);
        debug!("dry-run complete (nothing spawned)");
        return Ok(0);
    }

    let mut launcher = Launcher::system();
    let results = launcher.run(&cfg.plan).await;

    report::print_summary(&results);
    Ok(report::overall_exit_code(policy, &cfg.plan, &results))
}

/// Map the outcome of [`run`] to the process exit code.
pub fn exit_code(outcome: &Result<i32>) -> i32 {
    match outcome {
        Ok(code) => *code,
        Err(_) => SETUP_ERROR_EXIT_CODE,
    }
}
