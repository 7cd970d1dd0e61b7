//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod run;
mod status;

pub use run::RunArgs;
pub use status::StatusArgs;

use anyhow::Result;
use clap::Subcommand;

use crate::config::Config;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Run waves of tasks to completion and print their logs
    Run(RunArgs),
    /// Show the runs the service is currently tracking
    Status(StatusArgs),
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Run(args) => run::handle_run_command(args, config).await,
        Commands::Status(args) => status::handle_status_command(args, config).await,
    }
}
