// Runs real processes through `launchseq::run`; relies on `true`, `false`
// and `sh` on PATH.
#![cfg(unix)]

mod common;

use std::fs;
use std::path::{Path, PathBuf};

use launchseq::cli::CliArgs;
use launchseq::config::{builtin_config, resolve_config_in};
use launchseq::types::ExitCodePolicy;
use launchseq::{SETUP_ERROR_EXIT_CODE, exit_code, run, run_in};

use common::{init_tracing, with_timeout, write_plan};

fn args(config: Option<&Path>) -> CliArgs {
    CliArgs {
        config: config.map(PathBuf::from),
        exit_code: None,
        log_level: None,
        dry_run: false,
    }
}

#[tokio::test]
async fn exit_code_flag_selects_worst_policy() {
    init_tracing();
    let plan = write_plan(
        r#"
[[step]]
program = "false"
"#,
    );

    let default_policy = with_timeout(run(args(Some(plan.path())))).await;
    assert_eq!(default_policy.unwrap(), 0);

    let worst = with_timeout(run(CliArgs {
        exit_code: Some(ExitCodePolicy::Worst),
        ..args(Some(plan.path()))
    }))
    .await;
    assert_eq!(worst.unwrap(), 1);
}

#[tokio::test]
async fn exit_code_flag_overrides_plan_file() {
    init_tracing();
    let plan = write_plan(
        r#"
[config]
exit_code = "worst"

[[step]]
program = "true"

[[step]]
program = "nonexistent-binary-xyz"
mode = "detached"
"#,
    );

    let from_file = with_timeout(run(args(Some(plan.path())))).await;
    assert_eq!(from_file.unwrap(), 127);

    let overridden = with_timeout(run(CliArgs {
        exit_code: Some(ExitCodePolicy::AlwaysSuccess),
        ..args(Some(plan.path()))
    }))
    .await;
    assert_eq!(overridden.unwrap(), 0);
}

#[tokio::test]
async fn dry_run_spawns_nothing() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let plan = write_plan(&format!(
        r#"
[[step]]
program = "sh"
args = ["-c", "touch marker"]
cwd = "{}"
"#,
        dir.path().display()
    ));
    let marker = dir.path().join("marker");

    let dry = with_timeout(run(CliArgs {
        dry_run: true,
        ..args(Some(plan.path()))
    }))
    .await;
    assert_eq!(dry.unwrap(), 0);
    assert!(!marker.exists(), "dry-run must not spawn the step");

    // Same plan for real, so the check above is meaningful.
    let real = with_timeout(run(args(Some(plan.path())))).await;
    assert_eq!(real.unwrap(), 0);
    assert!(marker.exists());
}

#[tokio::test]
async fn launch_toml_in_search_dir_is_used_without_config_flag() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("Launch.toml"),
        r#"
[[step]]
program = "sh"
args = ["-c", "touch picked-up"]
cwd = "."
"#,
    )
    .unwrap();

    let outcome = with_timeout(run_in(args(None), dir.path())).await;

    assert_eq!(outcome.unwrap(), 0);
    assert!(dir.path().join("picked-up").exists());
}

#[test]
fn builtin_plan_is_used_when_no_plan_file_exists() {
    let dir = tempfile::tempdir().unwrap();

    let cfg = resolve_config_in(None, dir.path()).unwrap();

    assert_eq!(cfg, builtin_config().unwrap());
}

#[tokio::test]
async fn builtin_plan_dry_run_succeeds() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();

    let outcome = with_timeout(run_in(
        CliArgs {
            dry_run: true,
            ..args(None)
        },
        dir.path(),
    ))
    .await;

    assert_eq!(outcome.unwrap(), 0);
}

#[tokio::test]
async fn setup_errors_exit_with_two() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.toml");

    let outcome = with_timeout(run(args(Some(missing.as_path())))).await;
    assert!(outcome.is_err());
    assert_eq!(exit_code(&outcome), SETUP_ERROR_EXIT_CODE);
    assert_eq!(SETUP_ERROR_EXIT_CODE, 2);

    let empty = write_plan("[config]\nexit_code = \"worst\"\n");
    let outcome = with_timeout(run(args(Some(empty.path())))).await;
    assert_eq!(exit_code(&outcome), 2);
}

#[tokio::test]
async fn step_results_pass_through_as_exit_code() {
    init_tracing();
    let plan = write_plan(
        r#"
[config]
exit_code = "worst"

[[step]]
program = "sh"
args = ["-c", "exit 5"]
"#,
    );

    let outcome = with_timeout(run(args(Some(plan.path())))).await;

    assert_eq!(exit_code(&outcome), 5);
}
