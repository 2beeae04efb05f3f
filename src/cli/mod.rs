// CLI module - process entry points

pub mod migrate;
pub mod serve;

use clap::{Parser, Subcommand};

use crate::config::BootstrapSettings;

/// Server-rendered to-do list
#[derive(Parser, Debug)]
#[command(name = "todolist")]
#[command(about = "Server-rendered to-do list", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run migrations, then serve the list (default)
    Serve,

    /// Run pending database migrations and exit
    Migrate,
}

/// Execute CLI command
///
/// Routes the parsed CLI command to the appropriate handler function.
pub async fn execute_command(
    cli: Cli,
    settings: &BootstrapSettings,
) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => serve::run_server(settings).await?,
        Commands::Migrate => migrate::run_migrations(settings).await?,
    }

    Ok(())
}
