//! Tug CLI
//!
//! Command-line driver for the tug data-integration client: runs waves
//! of named tasks to completion and inspects the remote activity feed.

mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use tug_core::domain::session::Credential;

#[derive(Parser)]
#[command(name = "tug")]
#[command(about = "Trigger-and-wait client for cloud data-integration jobs", long_about = None)]
struct Cli {
    /// Login endpoint of the data-integration service
    #[arg(
        long,
        env = "TUG_LOGIN_URL",
        default_value = "https://dm-us.informaticacloud.com/ma/api/v2/user/login"
    )]
    login_url: String,

    /// Account username
    #[arg(long, env = "TUG_USERNAME")]
    username: String,

    /// Account password
    #[arg(long, env = "TUG_PASSWORD", hide_env_values = true)]
    password: String,

    /// Per-request HTTP timeout in seconds
    #[arg(long, env = "TUG_HTTP_TIMEOUT", default_value_t = 30)]
    http_timeout: u64,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tug_cli=info,tug_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = Config {
        login_url: cli.login_url,
        credential: Credential::new(cli.username, cli.password),
        http_timeout: Duration::from_secs(cli.http_timeout),
    };
    config.validate()?;

    handle_command(cli.command, &config).await
}
