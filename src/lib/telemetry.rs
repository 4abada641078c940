//! Telemetry initialization and training-run span helpers.

use std::time::Instant;

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, info_span, Span};
use tracing_subscriber::{fmt, EnvFilter};
use uuid::Uuid;

/// Filter used when `RUST_LOG` is unset or invalid. Only the training
/// program's own output reaches the terminal unless something goes wrong.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Initialize `tracing` and format developer logs.
pub fn init_tracing() -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to initialize tracing: {err}"))
}

/// Span helper to record start and finish of one training run.
pub struct RunSpan {
    span: Span,
    started_at: Instant,
    run_id: Uuid,
}

impl RunSpan {
    /// Start a run span.
    pub fn start(run_id: Uuid, mode: &'static str) -> Self {
        let started_wall: DateTime<Utc> = Utc::now();
        let span = info_span!(
            target: "train_launcher::launch",
            "training_run",
            %run_id,
            mode,
            started_at = %started_wall.to_rfc3339()
        );
        Self {
            span,
            started_at: Instant::now(),
            run_id,
        }
    }

    /// Handle used to instrument the child wait future.
    pub fn span(&self) -> Span {
        self.span.clone()
    }

    /// Close the span while recording exit status and elapsed time.
    pub fn finish(self, status: &'static str, exit_code: Option<i32>, signal: Option<i32>) {
        let elapsed_ms = self.started_at.elapsed().as_millis();
        let _entered = self.span.enter();
        info!(
            target: "train_launcher::launch",
            run_id = %self.run_id,
            status = status,
            exit_code = exit_code,
            signal = signal,
            elapsed_ms = elapsed_ms,
            "Training program exited"
        );
    }
}

/// Payload for logging a launch as structured telemetry.
#[derive(Debug, Serialize)]
pub struct LaunchTelemetry<'a> {
    pub mode: &'a str,
    pub program: &'a str,
    pub args: &'a [String],
    pub device_env: &'a str,
    pub device: &'a str,
    pub working_dir: Option<&'a str>,
}

/// Emit the launch about to happen to `tracing`.
pub fn emit_launch(telemetry: &LaunchTelemetry<'_>) {
    info!(
        target: "train_launcher::launch",
        mode = telemetry.mode,
        program = telemetry.program,
        args = ?telemetry.args,
        device_env = telemetry.device_env,
        device = telemetry.device,
        working_dir = telemetry.working_dir.unwrap_or(""),
        "Starting training program"
    );
}
