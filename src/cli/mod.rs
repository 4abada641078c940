//! CLI entrypoint module structure.
use std::{env, path::PathBuf};

use anyhow::{Context, Result};
use serde_json::json;

use crate::{
    launch::{LaunchOptions, LaunchPlan},
    lib::{errors::ConfigError, paths},
    profiles,
    settings::LauncherConfig,
};

pub mod args;

pub use args::{CliCommand, LaunchRequest, LauncherArgs, ParsedCommand};

/// Make an explicit `--config` path absolute against the current directory.
pub fn resolve_config_override(override_path: Option<PathBuf>) -> Result<Option<PathBuf>> {
    let Some(path) = override_path else {
        return Ok(None);
    };
    let cwd = env::current_dir().context("failed to obtain current directory")?;
    Ok(Some(paths::resolve_against(&cwd, &path)))
}

/// Load the named config file, or fall back to `LAUNCHER_CONFIG_PATH` / `launcher.toml`.
pub fn load_config(config_path: Option<PathBuf>) -> Result<LauncherConfig, ConfigError> {
    match config_path {
        Some(path) => LauncherConfig::load_from_path(path),
        None => LauncherConfig::load_from_env_or_default(),
    }
}

/// Execute an informational command and return the text to print.
pub fn execute_cli_command(command: CliCommand) -> Result<String> {
    match command {
        CliCommand::ListProfiles { config_path } => {
            let config = load_config(config_path)?;
            render_profile_list(&config)
        }
        CliCommand::PrintConfig { config_path } => {
            let config = load_config(config_path)?;
            config
                .to_toml()
                .context("failed to render configuration as TOML")
        }
    }
}

/// JSON listing of every profile with its resolved arguments.
fn render_profile_list(config: &LauncherConfig) -> Result<String> {
    let options = LaunchOptions::default();
    let entries: Vec<_> = profiles::all()
        .iter()
        .map(|profile| {
            let plan = LaunchPlan::resolve(profile, config, &options);
            json!({
                "mode": profile.mode,
                "args": plan.flag_args(),
                "command": plan.command_line(),
            })
        })
        .collect();

    let payload = json!({
        "config_path": config.source_path.to_string_lossy(),
        "config_file_present": config.file_present,
        "device": {
            "env": config.device.env,
            "value": config.device.value,
        },
        "profiles": entries,
    });

    Ok(serde_json::to_string_pretty(&payload)?)
}
