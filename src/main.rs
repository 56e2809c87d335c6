//! Entry point for the emptykit CLI.
use std::process::ExitCode;

use clap::Parser;
use emptykit::{
    cli::{execute_command, CliArgs, CliExit},
    config::{telemetry as config_telemetry, CliConfig, DEFAULT_LOG_LEVEL},
    lib::telemetry::{self, CommandSpan},
};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(exit) => exit.report(),
    }
}

fn run() -> Result<(), CliExit> {
    let args = CliArgs::parse();
    let logging = telemetry::init_tracing(DEFAULT_LOG_LEVEL).map_err(CliExit::from_error)?;
    let config = CliConfig::load(args.config_override).map_err(CliExit::from_error)?;
    logging
        .set_level(&config.telemetry.level)
        .map_err(CliExit::from_error)?;
    config_telemetry::log_loaded(&config);

    let span = CommandSpan::start(args.command.name());
    match execute_command(args.command, &config) {
        Ok(output) => {
            span.finish("ok");
            println!("{output}");
            Ok(())
        }
        Err(err) => {
            span.finish("failed");
            Err(CliExit::from_error(err))
        }
    }
}
