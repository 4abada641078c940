//! Shared helpers for building the training program command.

use std::{collections::BTreeMap, path::Path, process::Stdio};

use tokio::process::Command;

pub struct TrainingCommandConfig<'a> {
    pub program: &'a Path,
    pub working_dir: Option<&'a Path>,
}

pub struct TrainingInvocation<'a> {
    pub args: &'a [String],
    pub env: &'a BTreeMap<String, String>,
}

/// Build the interpreter command for one training run.
///
/// The parent environment is inherited and `invocation.env` is layered on top.
/// All three standard streams are inherited so the training program owns the terminal.
pub fn build_training_command(
    config: TrainingCommandConfig<'_>,
    invocation: TrainingInvocation<'_>,
) -> Command {
    let mut command = Command::new(config.program);
    command.kill_on_drop(true);
    if let Some(dir) = config.working_dir {
        command.current_dir(dir);
    }
    for (key, value) in invocation.env {
        command.env(key, value);
    }
    command.args(invocation.args);
    command
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());
    command
}
