// src/report.rs

//! User-facing output: dry-run listing, per-step summary and the launcher's
//! own exit code.

use crate::config::ConfigFile;
use crate::plan::{LaunchPlan, LaunchResult};
use crate::types::{ExitCodePolicy, LaunchMode, StdioMode};

/// Fold step results into the launcher's exit code.
///
/// Under `Worst`, every step not marked `ignore_exit_code` contributes:
/// - a spawn failure (blocking or detached) gives its shell-style code,
/// - a blocking step gives its exit code, or 1 if a signal killed it,
/// - a started detached step gives 0.
pub fn overall_exit_code(
    policy: ExitCodePolicy,
    plan: &LaunchPlan,
    results: &[LaunchResult],
) -> i32 {
    match policy {
        ExitCodePolicy::AlwaysSuccess => 0,
        ExitCodePolicy::Worst => plan
            .iter()
            .zip(results)
            .filter(|(spec, _)| !spec.ignore_exit_code())
            .map(|(spec, result)| step_code(spec.mode(), result))
            .max()
            .unwrap_or(0),
    }
}

fn step_code(mode: LaunchMode, result: &LaunchResult) -> i32 {
    if let Some(ref failure) = result.error {
        return failure.exit_code();
    }
    match mode {
        LaunchMode::Detached => 0,
        LaunchMode::Blocking => result.exit_code.unwrap_or(1),
    }
}

/// One line per step, e.g. `  [2/4] workspace   exit 0`.
pub fn format_summary(results: &[LaunchResult]) -> String {
    let total = results.len();
    let width = results.iter().map(|r| r.name.len()).max().unwrap_or(0);
    let mut out = String::new();

    for (idx, result) in results.iter().enumerate() {
        let status = match (&result.error, result.mode, result.exit_code) {
            (Some(failure), _, _) => format!("spawn failed: {}", failure.message),
            (None, LaunchMode::Detached, _) => "started (detached)".to_string(),
            (None, LaunchMode::Blocking, Some(code)) => format!("exit {code}"),
            (None, LaunchMode::Blocking, None) => "terminated by signal".to_string(),
        };
        out.push_str(&format!(
            "  [{}/{}] {:<width$}  {}\n",
            idx + 1,
            total,
            result.name,
            status
        ));
    }
    out
}

pub fn print_summary(results: &[LaunchResult]) {
    println!("launchseq summary");
    print!("{}", format_summary(results));
}

/// Simple dry-run output: print policy and steps.
pub fn print_dry_run(cfg: &ConfigFile, policy: ExitCodePolicy) {
    println!("launchseq dry-run");
    println!("  config.exit_code = {:?}", policy);
    println!();

    println!("steps ({}):", cfg.plan.len());
    for (idx, spec) in cfg.plan.iter().enumerate() {
        println!("  {}. {}", idx + 1, spec.name());
        println!("      cmd: {}", spec.command_line());
        println!("      mode: {:?}", spec.mode());
        if let Some(dir) = spec.working_directory() {
            println!("      cwd: {}", dir.display());
        }
        if spec.stdio() != StdioMode::Inherit {
            println!("      stdio: {:?}", spec.stdio());
        }
        if spec.ignore_exit_code() {
            println!("      ignore_exit_code: true");
        }
    }
}
