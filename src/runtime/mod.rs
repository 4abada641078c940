//! Launch orchestration and process exit handling.
mod startup;

pub use startup::{exit_code_for, run_launch, RuntimeExit};
