use std::process::ExitCode;

use clap::Parser;
use todolist::cli::{execute_command, Cli};
use todolist::config::{init_logging, BootstrapSettings};

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    if let Err(e) = init_logging() {
        eprintln!("{}", e);
        return ExitCode::FAILURE;
    }

    let cli = Cli::parse();

    let settings = match BootstrapSettings::from_env() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!(error = %e, "Invalid configuration");
            return ExitCode::FAILURE;
        }
    };
    tracing::debug!(?settings, "Loaded bootstrap settings");

    match execute_command(cli, &settings).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Exiting after unrecoverable error");
            ExitCode::FAILURE
        }
    }
}
