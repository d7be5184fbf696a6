use std::process::ExitCode;

use clap::Parser;
use tracing::error;

use topogen::cli::{run_cli, Cli};
use topogen::logging;

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        eprintln!("failed to initialize logging: {}", err);
        return ExitCode::FAILURE;
    }

    if let Err(err) = run_cli(Cli::parse()) {
        error!(error = %err, "command failed");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
