// src/config/builtin.rs

//! Plan used when no plan file is given or found: build the game, switch
//! to workspace 3, then open the lobby server and a client in their own
//! terminal windows.

use crate::config::model::{ConfigFile, ConfigSection};
use crate::errors::Result;
use crate::plan::{CommandSpec, LaunchPlan};

const CARGO_FEATURES: &str = "bevy/dynamic_linking";
const WORKSPACE: &str = "3";

pub fn builtin_plan() -> Result<LaunchPlan> {
    LaunchPlan::new(vec![
        CommandSpec::new("cargo")
            .with_name("build")
            .with_args(["build", "--features", CARGO_FEATURES]),
        CommandSpec::new("hyprctl")
            .with_name("workspace")
            .with_args(["dispatch", "workspace", WORKSPACE])
            .ignoring_exit_code(),
        terminal_step("lobby-server"),
        terminal_step("client"),
    ])
}

pub fn builtin_config() -> Result<ConfigFile> {
    Ok(ConfigFile::new_unchecked(
        ConfigSection::default(),
        builtin_plan()?,
    ))
}

fn terminal_step(bin: &str) -> CommandSpec {
    CommandSpec::new("kitty")
        .with_name(bin)
        .with_args([
            "--hold".to_string(),
            "--detach".to_string(),
            "sh".to_string(),
            "-c".to_string(),
            format!("cargo run --bin {bin} --features {CARGO_FEATURES}"),
        ])
        .detached()
}
