use tracing::{debug, info};

use super::{LauncherConfig, CONFIG_ENV_KEY, DEFAULT_CONFIG_PATH};

pub fn log_env_source(path: &std::path::Path, from_env: bool) {
    if from_env {
        info!(
            target: "train_launcher::config",
            path = %path.display(),
            "Loading configuration using LAUNCHER_CONFIG_PATH environment variable"
        );
    } else {
        debug!(
            target: "train_launcher::config",
            path = %path.display(),
            env = CONFIG_ENV_KEY,
            default = DEFAULT_CONFIG_PATH,
            "LAUNCHER_CONFIG_PATH not set; using default launcher.toml"
        );
    }
}

pub fn log_loaded(config: &LauncherConfig) {
    info!(
        target: "train_launcher::config",
        path = %config.source_path.display(),
        file_present = config.file_present,
        python = %config.launcher.python.display(),
        script = %config.launcher.script.display(),
        device_env = %config.device.env,
        device = %config.device.value,
        "Configuration resolved"
    );
}
