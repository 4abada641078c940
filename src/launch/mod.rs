//! Mode dispatch: resolve a profile into a plan and run the training program.
pub mod executor;
pub mod plan;

use tracing::{info, warn};

use crate::{
    lib::errors::LaunchError,
    profiles::{self, InvocationProfile},
    settings::LauncherConfig,
};

pub use executor::{run_plan, LaunchOutcome};
pub use plan::LaunchPlan;

/// Per-run choices collected from the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaunchOptions {
    pub mode: Option<String>,
    pub device_override: Option<String>,
    pub extra_args: Vec<String>,
    pub dry_run: bool,
    pub strict: bool,
}

/// Result of dispatching one mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// No profile matched; nothing was started.
    Skipped { mode: Option<String> },
    /// `--dry-run`: the plan that would have been executed.
    Planned(LaunchPlan),
    Completed(LaunchOutcome),
}

/// Outcome of matching `options.mode` against the profile catalog.
#[derive(Debug, Clone, Copy)]
pub enum ModeMatch {
    Profile(&'static InvocationProfile),
    /// No profile matched and `strict` is off; nothing will run.
    Unmatched,
}

/// Match the mode before any configuration is consulted.
///
/// An unknown or absent mode is only an error when `strict` is set.
pub fn match_mode(options: &LaunchOptions) -> Result<ModeMatch, LaunchError> {
    let mode = options.mode.as_deref().unwrap_or_default();
    match profiles::lookup(mode) {
        Some(profile) => Ok(ModeMatch::Profile(profile)),
        None if options.strict => Err(LaunchError::UnknownMode {
            mode: mode.to_string(),
        }),
        None => {
            warn!(
                target: "train_launcher::launch",
                mode = mode,
                "No launch profile matches mode; nothing to run"
            );
            Ok(ModeMatch::Unmatched)
        }
    }
}

/// Resolve the plan for `options.mode` without running it.
///
/// Returns `Ok(None)` for an unknown or absent mode unless `strict` is set.
pub fn resolve(
    options: &LaunchOptions,
    config: &LauncherConfig,
) -> Result<Option<LaunchPlan>, LaunchError> {
    match match_mode(options)? {
        ModeMatch::Profile(profile) => Ok(Some(LaunchPlan::resolve(profile, config, options))),
        ModeMatch::Unmatched => Ok(None),
    }
}

/// Look up the mode, then skip, plan, or run it.
pub async fn dispatch(
    options: &LaunchOptions,
    config: &LauncherConfig,
) -> Result<DispatchOutcome, LaunchError> {
    let Some(plan) = resolve(options, config)? else {
        return Ok(DispatchOutcome::Skipped {
            mode: options.mode.clone(),
        });
    };

    if options.dry_run {
        info!(
            target: "train_launcher::launch",
            mode = plan.mode.as_str(),
            command = %plan.command_line(),
            "Dry run; training program not started"
        );
        return Ok(DispatchOutcome::Planned(plan));
    }

    run_plan(&plan).await.map(DispatchOutcome::Completed)
}
