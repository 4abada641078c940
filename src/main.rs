//! Entry point for train-launcher.
use std::process::ExitCode;

use clap::Parser;
use train_launcher::{
    cli::{execute_cli_command, CliCommand, LauncherArgs, ParsedCommand},
    lib::telemetry,
    runtime::{self, RuntimeExit},
};

#[tokio::main]
async fn main() -> ExitCode {
    match bootstrap().await {
        Ok(code) => code,
        Err(exit) => exit.report(),
    }
}

async fn bootstrap() -> Result<ExitCode, RuntimeExit> {
    telemetry::init_tracing().map_err(RuntimeExit::from_error)?;
    let args = LauncherArgs::parse();
    let command = args.into_command().map_err(RuntimeExit::from_error)?;

    match command {
        ParsedCommand::Launch(request) => runtime::run_launch(request).await,
        ParsedCommand::Cli(command) => handle_cli_command(command),
    }
}

fn handle_cli_command(command: CliCommand) -> Result<ExitCode, RuntimeExit> {
    let message = execute_cli_command(command).map_err(RuntimeExit::from_error)?;
    println!("{message}");
    Ok(ExitCode::SUCCESS)
}
