use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::lib::{errors::ConfigError, paths};

pub const DEFAULT_PYTHON: &str = "python";
pub const DEFAULT_SCRIPT: &str = "run.py";
pub const DEFAULT_CHECKPOINT_PATH: &str = "checkpoints/lstm/best.pth";

/// Interpreter, entry point, and checkpoint settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LauncherSection {
    pub python: PathBuf,
    pub script: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub working_dir: Option<PathBuf>,
    pub checkpoint: PathBuf,
}

impl Default for LauncherSection {
    fn default() -> Self {
        Self {
            python: PathBuf::from(DEFAULT_PYTHON),
            script: PathBuf::from(DEFAULT_SCRIPT),
            working_dir: None,
            checkpoint: PathBuf::from(DEFAULT_CHECKPOINT_PATH),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct RawLauncherSection {
    pub python: Option<PathBuf>,
    pub script: Option<PathBuf>,
    pub working_dir: Option<PathBuf>,
    pub checkpoint: Option<PathBuf>,
}

/// `working_dir` is resolved against the directory holding the config file.
pub fn parse_launcher_section(
    raw: Option<RawLauncherSection>,
    path: &Path,
) -> Result<LauncherSection, ConfigError> {
    let raw = raw.unwrap_or_default();
    let defaults = LauncherSection::default();

    let python = raw.python.unwrap_or(defaults.python);
    validate_non_empty(path, "launcher.python", &python)?;

    let script = raw.script.unwrap_or(defaults.script);
    validate_non_empty(path, "launcher.script", &script)?;

    let checkpoint = raw.checkpoint.unwrap_or(defaults.checkpoint);
    validate_non_empty(path, "launcher.checkpoint", &checkpoint)?;

    let working_dir = match raw.working_dir {
        Some(dir) => {
            validate_non_empty(path, "launcher.working_dir", &dir)?;
            let base = path.parent().unwrap_or_else(|| Path::new(""));
            Some(paths::resolve_against(base, &dir))
        }
        None => None,
    };

    Ok(LauncherSection {
        python,
        script,
        working_dir,
        checkpoint,
    })
}

fn validate_non_empty(path: &Path, field: &'static str, value: &Path) -> Result<(), ConfigError> {
    if value.as_os_str().is_empty() {
        return Err(ConfigError::InvalidField {
            path: path.to_path_buf(),
            field,
            message: "Value cannot be empty".into(),
        });
    }
    Ok(())
}
