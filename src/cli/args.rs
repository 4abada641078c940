//! CLI argument definitions and `LaunchRequest` construction.
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::Parser;

use crate::{launch::LaunchOptions, profiles, settings::device::validate_device_value};

use super::resolve_config_override;

/// Parsed command intent from CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedCommand {
    Launch(LaunchRequest),
    Cli(CliCommand),
}

/// Informational commands that never start the training program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Print every profile resolved against the configuration.
    ListProfiles { config_path: Option<PathBuf> },
    /// Print the effective configuration.
    PrintConfig { config_path: Option<PathBuf> },
}

/// A mode launch with its configuration source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchRequest {
    /// Explicit config file; `None` means `LAUNCHER_CONFIG_PATH` or `launcher.toml`.
    pub config_path: Option<PathBuf>,
    pub options: LaunchOptions,
}

/// Command-line arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    author,
    version,
    about = "Launch run.py training presets by mode name",
    long_about = None,
    after_help = "Modes: pose_encode, train_rnn, test_rnn, train_tcn, train_rnn_attention, tune_lstm\n\nHint: use `train-launcher --dry-run <MODE>` to print the command without running it."
)]
pub struct LauncherArgs {
    /// Mode to launch. Unknown modes are ignored unless --strict is given.
    pub mode: Option<String>,
    /// Path to launcher.toml (overrides LAUNCHER_CONFIG_PATH).
    #[arg(long = "config")]
    pub config_override: Option<PathBuf>,
    /// Device selector value for this run (overrides device.value).
    #[arg(long = "device")]
    pub device_override: Option<String>,
    /// Print the resolved command as JSON instead of running it.
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,
    /// Fail on unknown modes instead of exiting successfully.
    #[arg(long, default_value_t = false)]
    pub strict: bool,
    /// Print all launch profiles as JSON.
    #[arg(long, default_value_t = false, conflicts_with_all = ["mode", "dry_run", "print_config"])]
    pub list: bool,
    /// Print the effective configuration as TOML.
    #[arg(long, default_value_t = false, conflicts_with_all = ["mode", "dry_run"])]
    pub print_config: bool,
    /// Extra arguments appended after the profile flags.
    #[arg(last = true)]
    pub extra_args: Vec<String>,
}

impl LauncherArgs {
    /// Parse CLI args into either a launch or an informational command.
    pub fn into_command(self) -> Result<ParsedCommand> {
        let config_path = resolve_config_override(self.config_override)?;

        if self.list {
            return Ok(ParsedCommand::Cli(CliCommand::ListProfiles { config_path }));
        }
        if self.print_config {
            return Ok(ParsedCommand::Cli(CliCommand::PrintConfig { config_path }));
        }

        let known_mode = profiles::lookup(self.mode.as_deref().unwrap_or_default()).is_some();
        if let Some(device) = self.device_override.as_deref().filter(|_| known_mode) {
            validate_device_value(device)
                .map_err(|message| anyhow!("invalid --device: {message}"))?;
        }

        Ok(ParsedCommand::Launch(LaunchRequest {
            config_path,
            options: LaunchOptions {
                mode: self.mode,
                device_override: self.device_override,
                extra_args: self.extra_args,
                dry_run: self.dry_run,
                strict: self.strict,
            },
        }))
    }
}
