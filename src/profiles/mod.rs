//! Static launch profiles keyed by mode name.
pub mod catalog;
pub mod registry;

use serde::Serialize;

pub use catalog::PROFILES;
pub use registry::{all, lookup};

/// Named preset identifying which training configuration to launch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    PoseEncode,
    TrainRnn,
    TestRnn,
    TrainTcn,
    TrainRnnAttention,
    TuneLstm,
}

impl Mode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Mode::PoseEncode => "pose_encode",
            Mode::TrainRnn => "train_rnn",
            Mode::TestRnn => "test_rnn",
            Mode::TrainTcn => "train_tcn",
            Mode::TrainRnnAttention => "train_rnn_attention",
            Mode::TuneLstm => "tune_lstm",
        }
    }
}

/// Value side of a profile flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagValue {
    Literal(&'static str),
    /// Substituted with the configured checkpoint path.
    Checkpoint,
}

/// One `--name value` pair passed to the training program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileFlag {
    pub name: &'static str,
    pub value: FlagValue,
}

impl ProfileFlag {
    pub const fn literal(name: &'static str, value: &'static str) -> Self {
        Self {
            name,
            value: FlagValue::Literal(value),
        }
    }

    pub const fn checkpoint(name: &'static str) -> Self {
        Self {
            name,
            value: FlagValue::Checkpoint,
        }
    }

    /// Command-line spelling of the flag name.
    pub fn switch(&self) -> String {
        format!("--{}", self.name)
    }
}

/// Fixed flag set associated with a mode.
#[derive(Debug, Clone, Copy)]
pub struct InvocationProfile {
    pub mode: Mode,
    pub flags: &'static [ProfileFlag],
}

impl InvocationProfile {
    /// Returns true if any flag takes the configured checkpoint path.
    pub fn uses_checkpoint(&self) -> bool {
        self.flags
            .iter()
            .any(|flag| flag.value == FlagValue::Checkpoint)
    }
}
