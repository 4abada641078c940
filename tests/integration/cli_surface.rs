use anyhow::Result;
use serde_json::Value;

use crate::common::{fixture, MockProject, BINARY_PATH};

#[test]
fn dry_run_prints_plan_without_running() -> Result<()> {
    let project = MockProject::new("2")?;
    let output = project.run(&["--dry-run", "tune_lstm"])?;

    assert!(output.status.success(), "launcher failed: {output:?}");
    assert!(project.recorded().is_none(), "dry run must not spawn");
    let plan: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(plan["mode"], "tune_lstm");
    assert_eq!(plan["program"], "/bin/sh");
    assert_eq!(plan["env"]["CUDA_VISIBLE_DEVICES"], "2");
    let args: Vec<_> = plan["args"]
        .as_array()
        .expect("args array")
        .iter()
        .filter_map(Value::as_str)
        .skip(1)
        .collect();
    assert_eq!(
        args,
        vec![
            "--encode",
            "0",
            "--mode",
            "tune",
            "--epochs",
            "200",
            "--model",
            "baseline_lstm",
            "--log",
            "tune_lstm"
        ]
    );
    Ok(())
}

#[test]
fn list_reports_all_modes() -> Result<()> {
    let project = MockProject::new("0")?;
    let output = project.run(&["--list"])?;

    assert!(output.status.success(), "launcher failed: {output:?}");
    let payload: Value = serde_json::from_slice(&output.stdout)?;
    let profiles = payload["profiles"].as_array().expect("profiles array");
    assert_eq!(profiles.len(), 6);
    assert_eq!(payload["config_file_present"], true);
    Ok(())
}

#[test]
fn print_config_renders_effective_toml() -> Result<()> {
    let project = MockProject::new("5")?;
    let output = project.run(&["--print-config"])?;

    assert!(output.status.success(), "launcher failed: {output:?}");
    let rendered: toml::Table = String::from_utf8(output.stdout)?.parse()?;
    assert_eq!(rendered["device"]["value"].as_str(), Some("5"));
    assert_eq!(rendered["launcher"]["python"].as_str(), Some("/bin/sh"));
    Ok(())
}

#[test]
fn missing_explicit_config_fails() -> Result<()> {
    let output = std::process::Command::new(BINARY_PATH)
        .arg("--config")
        .arg(fixture("tests/fixtures/does-not-exist.toml"))
        .arg("train_rnn")
        .env("RUST_LOG", "off")
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("does-not-exist.toml"), "{stderr}");
    Ok(())
}

#[test]
fn invalid_config_names_the_field() -> Result<()> {
    let output = std::process::Command::new(BINARY_PATH)
        .arg("--config")
        .arg(fixture("tests/fixtures/launcher_invalid_device_env.toml"))
        .arg("train_rnn")
        .env("RUST_LOG", "off")
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("device.env"), "{stderr}");
    Ok(())
}

#[test]
fn successful_run_is_quiet_without_rust_log() -> Result<()> {
    let project = MockProject::new("0")?;
    let output = project
        .command(&["train_rnn"])
        .env_remove("RUST_LOG")
        .output()?;

    assert!(output.status.success(), "launcher failed: {output:?}");
    assert!(project.recorded().is_some(), "training program did not run");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.is_empty(), "unexpected log output: {stderr}");
    Ok(())
}

#[test]
fn rust_log_still_enables_launch_details() -> Result<()> {
    let project = MockProject::new("0")?;
    let output = project
        .command(&["train_rnn"])
        .env("RUST_LOG", "info")
        .output()?;

    assert!(output.status.success(), "launcher failed: {output:?}");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Starting training program"), "{stderr}");
    Ok(())
}
