use super::{InvocationProfile, Mode, ProfileFlag};

const POSE_ENCODE: &[ProfileFlag] = &[
    ProfileFlag::literal("encode", "3"),
    ProfileFlag::literal("batch-size", "100"),
    ProfileFlag::literal("log", "pose"),
    ProfileFlag::literal("learning-rate", "1e-3"),
];

const TRAIN_RNN: &[ProfileFlag] = &[
    ProfileFlag::literal("encode", "0"),
    ProfileFlag::literal("batch-size", "20"),
    ProfileFlag::literal("log", "lstm"),
    ProfileFlag::literal("learning-rate", "1e-3"),
    ProfileFlag::literal("epochs", "200"),
];

const TEST_RNN: &[ProfileFlag] = &[
    ProfileFlag::literal("encode", "0"),
    ProfileFlag::literal("batch-size", "100"),
    ProfileFlag::literal("mode", "test"),
    ProfileFlag::checkpoint("checkpoint"),
];

const TRAIN_TCN: &[ProfileFlag] = &[
    ProfileFlag::literal("model", "tcn"),
    ProfileFlag::literal("encode", "0"),
    ProfileFlag::literal("batch-size", "20"),
    ProfileFlag::literal("log", "tcn"),
    ProfileFlag::literal("learning-rate", "1e-3"),
    ProfileFlag::literal("epochs", "500"),
    ProfileFlag::literal("hidden-size", "25"),
    ProfileFlag::literal("levels", "8"),
    ProfileFlag::literal("optim", "SGD"),
    ProfileFlag::literal("dropout", "0.05"),
];

const TRAIN_RNN_ATTENTION: &[ProfileFlag] = &[
    ProfileFlag::literal("encode", "0"),
    ProfileFlag::literal("batch-size", "20"),
    ProfileFlag::literal("log", "lstm_att"),
    ProfileFlag::literal("learning-rate", "1e-3"),
    ProfileFlag::literal("epochs", "200"),
    ProfileFlag::literal("model", "attention_lstm"),
];

const TUNE_LSTM: &[ProfileFlag] = &[
    ProfileFlag::literal("encode", "0"),
    ProfileFlag::literal("mode", "tune"),
    ProfileFlag::literal("epochs", "200"),
    ProfileFlag::literal("model", "baseline_lstm"),
    ProfileFlag::literal("log", "tune_lstm"),
];

/// Every launch profile, in the order `--list` reports them.
pub const PROFILES: &[InvocationProfile] = &[
    InvocationProfile {
        mode: Mode::PoseEncode,
        flags: POSE_ENCODE,
    },
    InvocationProfile {
        mode: Mode::TrainRnn,
        flags: TRAIN_RNN,
    },
    InvocationProfile {
        mode: Mode::TestRnn,
        flags: TEST_RNN,
    },
    InvocationProfile {
        mode: Mode::TrainTcn,
        flags: TRAIN_TCN,
    },
    InvocationProfile {
        mode: Mode::TrainRnnAttention,
        flags: TRAIN_RNN_ATTENTION,
    },
    InvocationProfile {
        mode: Mode::TuneLstm,
        flags: TUNE_LSTM,
    },
];
