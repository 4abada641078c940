use std::{
    fs,
    path::Path,
    process::{Command, Output},
};

use anyhow::Result;

use crate::common::{MockProject, BINARY_PATH};

/// Run the binary from `dir` with no `--config`, so configuration comes from
/// `LAUNCHER_CONFIG_PATH` or `./launcher.toml`.
fn run_in(dir: &Path, args: &[&str], config_env: Option<&str>) -> Result<Output> {
    let mut command = Command::new(BINARY_PATH);
    command
        .current_dir(dir)
        .args(args)
        .env("RUST_LOG", "off")
        .env("MOCK_RUN_OUTPUT", dir.join("mock-run.out"))
        .env_remove("LAUNCHER_CONFIG_PATH");
    if let Some(path) = config_env {
        command.env("LAUNCHER_CONFIG_PATH", path);
    }
    Ok(command.output()?)
}

fn flags(pairs: &[(&str, &str)]) -> Vec<String> {
    pairs
        .iter()
        .flat_map(|(name, value)| [format!("--{name}"), value.to_string()])
        .collect()
}

#[test]
fn train_tcn_invokes_program_with_documented_flags() -> Result<()> {
    let project = MockProject::new("0")?;
    let output = project.run(&["train_tcn"])?;

    assert!(output.status.success(), "launcher failed: {output:?}");
    let record = project.recorded().expect("mock run.py should have run");
    assert_eq!(record.device, "0");
    assert_eq!(
        record.args,
        flags(&[
            ("model", "tcn"),
            ("encode", "0"),
            ("batch-size", "20"),
            ("log", "tcn"),
            ("learning-rate", "1e-3"),
            ("epochs", "500"),
            ("hidden-size", "25"),
            ("levels", "8"),
            ("optim", "SGD"),
            ("dropout", "0.05"),
        ])
    );
    Ok(())
}

#[test]
fn every_known_mode_sets_the_device_selector() -> Result<()> {
    for mode in [
        "pose_encode",
        "train_rnn",
        "test_rnn",
        "train_tcn",
        "train_rnn_attention",
        "tune_lstm",
    ] {
        let project = MockProject::new("3")?;
        let output = project.run(&[mode])?;

        assert!(output.status.success(), "{mode}: {output:?}");
        let record = project.recorded().expect("mock run.py should have run");
        assert_eq!(record.device, "3", "{mode}");
        assert!(!record.args.is_empty(), "{mode}");
    }
    Ok(())
}

#[test]
fn test_rnn_passes_checkpoint_from_config() -> Result<()> {
    let project = MockProject::new("0")?;
    let output = project.run(&["test_rnn"])?;

    assert!(output.status.success(), "launcher failed: {output:?}");
    let record = project.recorded().expect("mock run.py should have run");
    assert_eq!(
        record.args,
        flags(&[
            ("encode", "0"),
            ("batch-size", "100"),
            ("mode", "test"),
            ("checkpoint", "log/lstm/checkpoint.pth"),
        ])
    );
    Ok(())
}

#[test]
fn child_runs_in_configured_working_dir() -> Result<()> {
    let project = MockProject::new("0")?;
    project.run(&["train_rnn"])?;

    let record = project.recorded().expect("mock run.py should have run");
    assert_eq!(record.cwd.canonicalize()?, project.path().canonicalize()?);
    Ok(())
}

#[test]
fn unknown_mode_is_a_silent_success() -> Result<()> {
    let project = MockProject::new("0")?;
    let output = project.run(&["unknown_mode"])?;

    assert_eq!(output.status.code(), Some(0));
    assert!(project.recorded().is_none(), "no invocation expected");
    assert!(output.stdout.is_empty());
    Ok(())
}

#[test]
fn missing_mode_is_a_silent_success() -> Result<()> {
    let project = MockProject::new("0")?;
    let output = project.run(&[])?;

    assert_eq!(output.status.code(), Some(0));
    assert!(project.recorded().is_none(), "no invocation expected");
    Ok(())
}

#[test]
fn strict_unknown_mode_fails_with_structured_error() -> Result<()> {
    let project = MockProject::new("0")?;
    let output = project.run(&["--strict", "unknown_mode"])?;

    assert_eq!(output.status.code(), Some(2));
    assert!(project.recorded().is_none());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("\"code\":\"unknown_mode\""), "{stderr}");
    Ok(())
}

#[test]
fn child_exit_status_is_propagated() -> Result<()> {
    let project = MockProject::new("0")?;
    let output = project
        .command(&["train_rnn"])
        .env("MOCK_RUN_EXIT", "4")
        .output()?;

    assert_eq!(output.status.code(), Some(4));
    assert!(project.recorded().is_some());
    Ok(())
}

#[test]
fn device_override_and_passthrough_args_reach_the_child() -> Result<()> {
    let project = MockProject::new("0")?;
    let output = project.run(&[
        "--device",
        "1,2",
        "pose_encode",
        "--",
        "--pose-train-path",
        "/data/pose/train.csv",
    ])?;

    assert!(output.status.success(), "launcher failed: {output:?}");
    let record = project.recorded().expect("mock run.py should have run");
    assert_eq!(record.device, "1,2");
    assert_eq!(
        record.args[record.args.len() - 2..],
        ["--pose-train-path", "/data/pose/train.csv"]
    );
    Ok(())
}

#[test]
fn unknown_mode_ignores_stale_config_env() -> Result<()> {
    let temp = tempfile::tempdir()?;
    let stale = temp.path().join("gone.toml");
    let output = run_in(temp.path(), &["unknown_mode"], stale.to_str())?;

    assert_eq!(output.status.code(), Some(0), "{output:?}");
    assert!(!temp.path().join("mock-run.out").exists(), "no invocation expected");
    Ok(())
}

#[test]
fn unknown_mode_ignores_invalid_local_config() -> Result<()> {
    let temp = tempfile::tempdir()?;
    fs::write(temp.path().join("launcher.toml"), "[device]\nenv = \"lower\"\n")?;

    let unknown = run_in(temp.path(), &["unknown_mode"], None)?;
    assert_eq!(unknown.status.code(), Some(0), "{unknown:?}");

    let missing = run_in(temp.path(), &[], None)?;
    assert_eq!(missing.status.code(), Some(0), "{missing:?}");

    let known = run_in(temp.path(), &["train_rnn"], None)?;
    assert_eq!(known.status.code(), Some(1), "known modes still need valid config");
    Ok(())
}

#[test]
fn unknown_mode_ignores_invalid_device_override() -> Result<()> {
    let temp = tempfile::tempdir()?;
    let output = run_in(temp.path(), &["--device", "", "unknown_mode"], None)?;

    assert_eq!(output.status.code(), Some(0), "{output:?}");
    Ok(())
}

#[test]
fn strict_unknown_mode_fails_before_config_is_read() -> Result<()> {
    let temp = tempfile::tempdir()?;
    let stale = temp.path().join("gone.toml");
    let output = run_in(temp.path(), &["--strict", "unknown_mode"], stale.to_str())?;

    assert_eq!(output.status.code(), Some(2), "{output:?}");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("\"code\":\"unknown_mode\""), "{stderr}");
    Ok(())
}
