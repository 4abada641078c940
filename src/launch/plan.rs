use std::{collections::BTreeMap, path::PathBuf};

use serde::Serialize;

use crate::{
    profiles::{FlagValue, InvocationProfile, Mode},
    settings::LauncherConfig,
};

use super::LaunchOptions;

/// A profile resolved against configuration into a concrete command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LaunchPlan {
    pub mode: Mode,
    pub program: PathBuf,
    pub args: Vec<String>,
    pub env: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub working_dir: Option<PathBuf>,
}

impl LaunchPlan {
    /// Script first, then the profile flags in order, then passthrough args.
    pub fn resolve(
        profile: &InvocationProfile,
        config: &LauncherConfig,
        options: &LaunchOptions,
    ) -> Self {
        let checkpoint = config.launcher.checkpoint.to_string_lossy();
        let mut args = Vec::with_capacity(1 + profile.flags.len() * 2 + options.extra_args.len());
        args.push(config.launcher.script.to_string_lossy().into_owned());
        for flag in profile.flags {
            args.push(flag.switch());
            match flag.value {
                FlagValue::Literal(value) => args.push(value.to_string()),
                FlagValue::Checkpoint => args.push(checkpoint.to_string()),
            }
        }
        args.extend(options.extra_args.iter().cloned());

        let device = options
            .device_override
            .clone()
            .unwrap_or_else(|| config.device.value.clone());
        let env = BTreeMap::from([(config.device.env.clone(), device)]);

        Self {
            mode: profile.mode,
            program: config.launcher.python.clone(),
            args,
            env,
            working_dir: config.launcher.working_dir.clone(),
        }
    }

    /// Flag tokens passed after the script path.
    pub fn flag_args(&self) -> &[String] {
        self.args.get(1..).unwrap_or_default()
    }

    /// `VAR=value program args...` rendering for logs and dry runs.
    pub fn command_line(&self) -> String {
        let mut parts: Vec<String> = self
            .env
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect();
        parts.push(self.program.to_string_lossy().into_owned());
        parts.extend(self.args.iter().cloned());
        parts.join(" ")
    }
}
