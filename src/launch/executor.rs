use std::process::ExitStatus;

use tracing::{warn, Instrument};
use uuid::Uuid;

use crate::lib::{
    errors::LaunchError,
    python::{build_training_command, TrainingCommandConfig, TrainingInvocation},
    telemetry::{self, LaunchTelemetry, RunSpan},
};

use super::LaunchPlan;

/// How the training program terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaunchOutcome {
    pub run_id: Uuid,
    pub exit_code: Option<i32>,
    pub signal: Option<i32>,
}

impl LaunchOutcome {
    fn from_status(run_id: Uuid, status: ExitStatus) -> Self {
        Self {
            run_id,
            exit_code: status.code(),
            signal: terminating_signal(&status),
        }
    }

    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }

    /// Status the launcher itself should exit with.
    ///
    /// A signal-terminated child maps to `128 + signal`, like a shell does.
    pub fn process_exit_code(&self) -> u8 {
        match (self.exit_code, self.signal) {
            (Some(code), _) => (code & 0xff) as u8,
            (None, Some(signal)) => (128 + signal).clamp(0, 255) as u8,
            (None, None) => 1,
        }
    }
}

#[cfg(unix)]
fn terminating_signal(status: &ExitStatus) -> Option<i32> {
    use std::os::unix::process::ExitStatusExt;
    status.signal()
}

#[cfg(not(unix))]
fn terminating_signal(_status: &ExitStatus) -> Option<i32> {
    None
}

/// Spawn the planned command and wait for it to exit.
pub async fn run_plan(plan: &LaunchPlan) -> Result<LaunchOutcome, LaunchError> {
    let run_id = Uuid::new_v4();
    let run_span = RunSpan::start(run_id, plan.mode.as_str());

    let mut command = build_training_command(
        TrainingCommandConfig {
            program: &plan.program,
            working_dir: plan.working_dir.as_deref(),
        },
        TrainingInvocation {
            args: &plan.args,
            env: &plan.env,
        },
    );

    let program = plan.program.to_string_lossy();
    let working_dir = plan
        .working_dir
        .as_ref()
        .map(|dir| dir.to_string_lossy().into_owned());
    let (device_env, device) = plan
        .env
        .iter()
        .next()
        .map(|(key, value)| (key.as_str(), value.as_str()))
        .unwrap_or_default();
    run_span.span().in_scope(|| {
        telemetry::emit_launch(&LaunchTelemetry {
            mode: plan.mode.as_str(),
            program: &program,
            args: &plan.args,
            device_env,
            device,
            working_dir: working_dir.as_deref(),
        })
    });

    let mut child = match command.spawn() {
        Ok(child) => child,
        Err(source) => {
            run_span.finish("spawn_failed", None, None);
            return Err(LaunchError::Spawn {
                program: plan.program.clone(),
                source,
            });
        }
    };

    let status = match child.wait().instrument(run_span.span()).await {
        Ok(status) => status,
        Err(source) => {
            run_span.finish("wait_failed", None, None);
            return Err(LaunchError::Wait {
                program: plan.program.clone(),
                source,
            });
        }
    };

    let outcome = LaunchOutcome::from_status(run_id, status);
    if outcome.success() {
        run_span.finish("succeeded", outcome.exit_code, outcome.signal);
    } else {
        warn!(
            target: "train_launcher::launch",
            mode = plan.mode.as_str(),
            exit_code = outcome.exit_code,
            signal = outcome.signal,
            "Training program exited unsuccessfully"
        );
        run_span.finish("failed", outcome.exit_code, outcome.signal);
    }
    Ok(outcome)
}
