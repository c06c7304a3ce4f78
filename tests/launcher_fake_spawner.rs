mod common;

use std::io;

use launchseq::exec::Launcher;
use launchseq::plan::{CommandSpec, LaunchPlan};
use launchseq::report::overall_exit_code;
use launchseq::types::{ExitCodePolicy, LaunchMode};
use launchseq_test_utils::fake_spawner::{FakeOutcome, FakeSpawner};

use common::init_tracing;

fn game_plan() -> LaunchPlan {
    LaunchPlan::new(vec![
        CommandSpec::new("cargo").with_name("build"),
        CommandSpec::new("hyprctl").with_name("workspace").ignoring_exit_code(),
        CommandSpec::new("kitty").with_name("server").detached(),
        CommandSpec::new("kitty").with_name("client").detached(),
    ])
    .unwrap()
}

#[tokio::test]
async fn steps_are_dispatched_in_plan_order() {
    init_tracing();
    let spawner = FakeSpawner::new();
    let dispatched = spawner.dispatched();
    let mut launcher = Launcher::new(spawner);

    let results = launcher.run(&game_plan()).await;

    let names: Vec<&str> = results.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["build", "workspace", "server", "client"]);

    let log = dispatched.lock().unwrap().clone();
    assert_eq!(
        log,
        vec![
            ("build".to_string(), LaunchMode::Blocking),
            ("workspace".to_string(), LaunchMode::Blocking),
            ("server".to_string(), LaunchMode::Detached),
            ("client".to_string(), LaunchMode::Detached),
        ]
    );
}

#[tokio::test]
async fn failed_build_does_not_stop_later_steps() {
    init_tracing();
    let spawner = FakeSpawner::new().with_outcome("cargo", FakeOutcome::Exit(101));
    let mut launcher = Launcher::new(spawner);

    let results = launcher.run(&game_plan()).await;

    assert_eq!(results[0].exit_code, Some(101));
    assert_eq!(results.len(), 4);
    assert!(results[2..].iter().all(|r| r.is_success()));
    assert_eq!(launcher.spawner().dispatched_names().len(), 4);
}

#[tokio::test]
async fn spawn_errors_are_recorded_for_both_modes() {
    init_tracing();
    let spawner = FakeSpawner::new()
        .with_outcome("hyprctl", FakeOutcome::SpawnError(io::ErrorKind::NotFound))
        .with_outcome("kitty", FakeOutcome::SpawnError(io::ErrorKind::PermissionDenied));
    let mut launcher = Launcher::new(spawner);
    let plan = game_plan();

    let results = launcher.run(&plan).await;

    assert_eq!(results[0].exit_code, Some(0));
    assert_eq!(
        results[1].error.as_ref().map(|e| e.kind),
        Some(io::ErrorKind::NotFound)
    );
    assert_eq!(
        results[3].error.as_ref().map(|e| e.kind),
        Some(io::ErrorKind::PermissionDenied)
    );

    // hyprctl is ignored; kitty's permission error wins.
    assert_eq!(overall_exit_code(ExitCodePolicy::Worst, &plan, &results), 126);
    assert_eq!(overall_exit_code(ExitCodePolicy::AlwaysSuccess, &plan, &results), 0);
}

#[tokio::test]
async fn signalled_blocking_step_records_no_code() {
    init_tracing();
    let spawner = FakeSpawner::new().with_outcome("cargo", FakeOutcome::Signal(9));
    let mut launcher = Launcher::new(spawner);
    let plan = game_plan();

    let results = launcher.run(&plan).await;

    assert_eq!(results[0].exit_code, None);
    assert!(results[0].error.is_none());
    assert_eq!(overall_exit_code(ExitCodePolicy::Worst, &plan, &results), 1);
}

#[tokio::test]
async fn detached_steps_never_carry_exit_codes() {
    init_tracing();
    let spawner = FakeSpawner::new().with_outcome("kitty", FakeOutcome::Exit(3));
    let mut launcher = Launcher::new(spawner);

    let results = launcher.run(&game_plan()).await;

    assert_eq!(results[2].exit_code, None);
    assert_eq!(results[3].exit_code, None);
}
