use std::process::ExitCode;

use anyhow::Error;
use serde_json::Value;

use crate::{
    cli::{load_config, LaunchRequest},
    launch::{self, DispatchOutcome, ModeMatch},
    lib::errors::LaunchError,
};

/// Exit status used when `--strict` rejects an unknown mode.
pub const UNKNOWN_MODE_EXIT: u8 = 2;

/// Bundles a runtime error message with an exit code and optional structured error data.
#[derive(Debug)]
pub struct RuntimeExit {
    message: String,
    exit_code: ExitCode,
    error_data: Option<Value>,
}

impl RuntimeExit {
    pub fn structured(error: Value, exit_code: ExitCode) -> Self {
        let message = error
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        Self {
            message,
            exit_code,
            error_data: Some(error),
        }
    }

    pub fn from_error(err: impl Into<Error>) -> Self {
        let err = err.into();
        Self {
            message: format!("{err:?}"),
            exit_code: ExitCode::FAILURE,
            error_data: None,
        }
    }

    pub fn from_launch_error(err: LaunchError) -> Self {
        let exit_code = match err {
            LaunchError::UnknownMode { .. } => ExitCode::from(UNKNOWN_MODE_EXIT),
            LaunchError::Spawn { .. } | LaunchError::Wait { .. } => ExitCode::FAILURE,
        };
        Self::structured(err.to_payload(), exit_code)
    }

    pub fn report(self) -> ExitCode {
        if let Some(data) = self.error_data {
            if let Ok(serialized) = serde_json::to_string(&data) {
                eprintln!("{serialized}");
            } else {
                eprintln!("{}", self.message);
            }
        } else {
            eprintln!("{}", self.message);
        }
        self.exit_code
    }

    pub fn exit_code(&self) -> ExitCode {
        self.exit_code
    }

    pub fn error_data(&self) -> Option<&Value> {
        self.error_data.as_ref()
    }
}

/// Exit status the launcher reports for a dispatch outcome.
pub fn exit_code_for(outcome: &DispatchOutcome) -> ExitCode {
    match outcome {
        DispatchOutcome::Skipped { .. } | DispatchOutcome::Planned(_) => ExitCode::SUCCESS,
        DispatchOutcome::Completed(result) => ExitCode::from(result.process_exit_code()),
    }
}

/// Load configuration, dispatch the requested mode, and map the result to an exit status.
///
/// The mode is matched first: an unmatched mode exits successfully without reading
/// configuration, so a stale or invalid config file cannot fail it.
pub async fn run_launch(request: LaunchRequest) -> Result<ExitCode, RuntimeExit> {
    let matched = launch::match_mode(&request.options).map_err(RuntimeExit::from_launch_error)?;
    if let ModeMatch::Unmatched = matched {
        return Ok(exit_code_for(&DispatchOutcome::Skipped {
            mode: request.options.mode,
        }));
    }

    let config = load_config(request.config_path).map_err(RuntimeExit::from_error)?;
    let outcome = launch::dispatch(&request.options, &config)
        .await
        .map_err(RuntimeExit::from_launch_error)?;

    if let DispatchOutcome::Planned(plan) = &outcome {
        let rendered = serde_json::to_string_pretty(plan).map_err(RuntimeExit::from_error)?;
        println!("{rendered}");
    }

    Ok(exit_code_for(&outcome))
}
