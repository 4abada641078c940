use std::{io, path::PathBuf};

use config::ConfigError as ConfigLoaderError;
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

/// Errors that can occur while loading or validating configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to build (read) the configuration file.
    #[error("Failed to read configuration file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    /// Failed to deserialize TOML into a struct.
    #[error("Failed to parse configuration file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    /// Required field is missing.
    #[error("Configuration file {path} is missing `{field}`")]
    MissingField { path: PathBuf, field: &'static str },
    /// Field failed validation.
    #[error("Configuration file {path} has invalid `{field}`: {message}")]
    InvalidField {
        path: PathBuf,
        field: &'static str,
        message: String,
    },
}

impl ConfigError {
    /// Helper to wrap `config::ConfigError` as a read failure.
    pub fn from_read_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        Self::FileRead { path, source }
    }

    /// Helper to wrap `config::ConfigError` as a parse failure.
    pub fn from_parse_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        Self::Parse { path, source }
    }
}

/// Failures while dispatching a mode to the training program.
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("Unknown mode `{mode}`")]
    UnknownMode { mode: String },
    #[error("Failed to start `{program}`: {source}")]
    Spawn {
        program: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed while waiting for `{program}`: {source}")]
    Wait {
        program: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl LaunchError {
    /// Descriptor used when reporting this error on stderr.
    pub fn descriptor(&self) -> &'static ErrorDescriptor {
        match self {
            LaunchError::UnknownMode { .. } => &UNKNOWN_MODE_ERROR,
            LaunchError::Spawn { .. } | LaunchError::Wait { .. } => &SPAWN_FAILED_ERROR,
        }
    }

    /// Structured payload with the descriptor fields and error details.
    pub fn to_payload(&self) -> Value {
        let details = match self {
            LaunchError::UnknownMode { mode } => serde_json::json!({ "mode": mode }),
            LaunchError::Spawn { program, source } | LaunchError::Wait { program, source } => {
                serde_json::json!({
                    "program": program.to_string_lossy(),
                    "reason": source.to_string(),
                })
            }
        };
        self.descriptor().payload(details)
    }
}

/// Structured error metadata printed by the binary.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorDescriptor {
    /// Error code.
    pub code: &'static str,
    /// User-facing message.
    pub message: &'static str,
    /// Recommended remediation.
    pub remediation: &'static str,
}

impl ErrorDescriptor {
    /// Simple constructor.
    pub const fn new(code: &'static str, message: &'static str, remediation: &'static str) -> Self {
        Self {
            code,
            message,
            remediation,
        }
    }

    /// Render the descriptor plus `details` as a JSON object.
    pub fn payload(&self, details: Value) -> Value {
        let mut data = Map::new();
        data.insert("code".into(), Value::String(self.code.into()));
        data.insert("message".into(), Value::String(self.message.into()));
        data.insert("remediation".into(), Value::String(self.remediation.into()));
        if !details.is_null() {
            data.insert("details".into(), details);
        }
        Value::Object(data)
    }
}

/// Reported when `--strict` is set and the mode matches no profile.
pub const UNKNOWN_MODE_ERROR: ErrorDescriptor = ErrorDescriptor::new(
    "unknown_mode",
    "The requested mode does not match any launch profile",
    "Run `train-launcher --list` to see the available modes.",
);

/// Reported when the training program could not be started or awaited.
pub const SPAWN_FAILED_ERROR: ErrorDescriptor = ErrorDescriptor::new(
    "spawn_failed",
    "The training program could not be started",
    "Check launcher.python and launcher.script in launcher.toml.",
);
