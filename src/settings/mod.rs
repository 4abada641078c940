//! Load and validate launcher configuration.
use std::{env, path::PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::lib::errors::ConfigError;

pub mod device;
pub mod launcher;
pub mod telemetry;

pub use device::{
    parse_device_section, DeviceSection, RawDeviceSection, DEFAULT_DEVICE, DEFAULT_DEVICE_ENV,
};
pub use launcher::{
    parse_launcher_section, LauncherSection, RawLauncherSection, DEFAULT_CHECKPOINT_PATH,
    DEFAULT_PYTHON, DEFAULT_SCRIPT,
};

pub const CONFIG_ENV_KEY: &str = "LAUNCHER_CONFIG_PATH";
pub const DEFAULT_CONFIG_PATH: &str = "launcher.toml";

/// Top-level configuration container.
#[derive(Debug, Clone)]
pub struct LauncherConfig {
    pub launcher: LauncherSection,
    pub device: DeviceSection,
    pub source_path: PathBuf,
    /// False when the optional default file was absent and defaults were used.
    pub file_present: bool,
}

#[derive(Debug, Deserialize)]
struct RawLauncherConfig {
    launcher: Option<RawLauncherSection>,
    device: Option<RawDeviceSection>,
}

#[derive(Serialize)]
struct EffectiveConfig<'a> {
    launcher: &'a LauncherSection,
    device: &'a DeviceSection,
}

impl LauncherConfig {
    /// Built-in defaults, as if an empty file had been loaded from `source_path`.
    pub fn defaults(source_path: PathBuf) -> Self {
        Self {
            launcher: LauncherSection::default(),
            device: DeviceSection::default(),
            source_path,
            file_present: false,
        }
    }

    /// Prefer `LAUNCHER_CONFIG_PATH` if set; otherwise read `launcher.toml` when it exists.
    pub fn load_from_env_or_default() -> Result<Self, ConfigError> {
        match env::var(CONFIG_ENV_KEY) {
            Ok(value) if !value.trim().is_empty() => {
                let path = PathBuf::from(value);
                telemetry::log_env_source(&path, true);
                Self::load_from_path(path)
            }
            _ => {
                let path = PathBuf::from(DEFAULT_CONFIG_PATH);
                telemetry::log_env_source(&path, false);
                Self::load_optional(path)
            }
        }
    }

    /// Load configuration from a path that must exist.
    pub fn load_from_path(path: PathBuf) -> Result<Self, ConfigError> {
        Self::load(path, true)
    }

    /// Load configuration from `path`, falling back to defaults when it is absent.
    pub fn load_optional(path: PathBuf) -> Result<Self, ConfigError> {
        if !path.exists() {
            let config = Self::defaults(path);
            telemetry::log_loaded(&config);
            return Ok(config);
        }
        Self::load(path, false)
    }

    fn load(path: PathBuf, required: bool) -> Result<Self, ConfigError> {
        info!(
            target: "train_launcher::config",
            path = %path.display(),
            required,
            "Starting configuration load"
        );

        let builder = config::Config::builder()
            .add_source(config::File::from(path.clone()).required(required));
        let document = builder.build().map_err(|err| {
            let error = ConfigError::from_read_error(path.clone(), err);
            error!(
                target: "train_launcher::config",
                path = %path.display(),
                reason = %error,
                "Failed to read configuration file"
            );
            error
        })?;

        let raw: RawLauncherConfig = document.try_deserialize().map_err(|err| {
            let error = ConfigError::from_parse_error(path.clone(), err);
            error!(
                target: "train_launcher::config",
                path = %path.display(),
                reason = %error,
                "Failed to parse configuration file"
            );
            error
        })?;

        let config = Self::from_raw(raw, path.clone()).map_err(|err| {
            error!(
                target: "train_launcher::config",
                path = %path.display(),
                reason = %err,
                "Failed to validate configuration file"
            );
            err
        })?;

        telemetry::log_loaded(&config);
        Ok(config)
    }

    fn from_raw(raw: RawLauncherConfig, path: PathBuf) -> Result<Self, ConfigError> {
        let launcher = parse_launcher_section(raw.launcher, &path)?;
        let device = parse_device_section(raw.device, &path)?;

        Ok(Self {
            launcher,
            device,
            source_path: path,
            file_present: true,
        })
    }

    /// Render the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&EffectiveConfig {
            launcher: &self.launcher,
            device: &self.device,
        })
    }
}
