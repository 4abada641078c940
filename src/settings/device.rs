use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::lib::errors::ConfigError;

pub const DEFAULT_DEVICE_ENV: &str = "CUDA_VISIBLE_DEVICES";
pub const DEFAULT_DEVICE: &str = "0";
const MAX_DEVICE_LEN: usize = 128;

/// GPU device selector exported to the training program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeviceSection {
    pub env: String,
    pub value: String,
}

impl Default for DeviceSection {
    fn default() -> Self {
        Self {
            env: DEFAULT_DEVICE_ENV.to_string(),
            value: DEFAULT_DEVICE.to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct RawDeviceSection {
    pub env: Option<String>,
    pub value: Option<String>,
}

pub fn parse_device_section(
    raw: Option<RawDeviceSection>,
    path: &Path,
) -> Result<DeviceSection, ConfigError> {
    let raw = raw.unwrap_or_default();
    let env = raw.env.unwrap_or_else(|| DEFAULT_DEVICE_ENV.to_string());
    validate_env_name(&env).map_err(|message| ConfigError::InvalidField {
        path: path.to_path_buf(),
        field: "device.env",
        message,
    })?;

    let value = raw.value.unwrap_or_else(|| DEFAULT_DEVICE.to_string());
    validate_device_value(&value).map_err(|message| ConfigError::InvalidField {
        path: path.to_path_buf(),
        field: "device.value",
        message,
    })?;

    Ok(DeviceSection { env, value })
}

/// Accepts names made of `A-Z`, `0-9`, and `_` that do not start with a digit.
pub fn validate_env_name(name: &str) -> Result<(), String> {
    let mut chars = name.chars();
    match chars.next() {
        None => return Err("Variable name cannot be empty".into()),
        Some(first) if first.is_ascii_digit() => {
            return Err(format!("Variable name cannot start with a digit: {name}"))
        }
        _ => {}
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
    {
        return Err(format!("Use upper-case letters, digits, and underscores only: {name}"));
    }
    Ok(())
}

/// Device values are opaque to the launcher but must be a single token.
pub fn validate_device_value(value: &str) -> Result<(), String> {
    if value.is_empty() {
        return Err("Device value cannot be empty".into());
    }
    if value.chars().count() > MAX_DEVICE_LEN {
        return Err(format!("Device value exceeds {MAX_DEVICE_LEN} characters"));
    }
    if value.chars().any(char::is_whitespace) {
        return Err(format!("Device value cannot contain whitespace: {value:?}"));
    }
    Ok(())
}
