//! Run command
//!
//! Drives one or two waves of named tasks through the executor. Tasks
//! within a wave run concurrently, each with its own session; the
//! second wave starts only after every first-wave task finished
//! cleanly. Ordering across waves is all this command adds — the
//! library itself never sequences jobs.

use anyhow::{Context, Result, bail};
use clap::Args;
use colored::*;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use crate::config::Config;
use tug_client::{IntegrationClient, PollConfig, TaskExecutor};
use tug_core::domain::task::TaskType;

/// Arguments for the run command
#[derive(Args)]
pub struct RunArgs {
    /// Task to run in the first wave (repeatable)
    #[arg(long = "task", required = true)]
    tasks: Vec<String>,

    /// Task to run after the first wave succeeds (repeatable)
    #[arg(long = "then")]
    then_tasks: Vec<String>,

    /// Task type code: DMASK, DRS, DSS, MTT, PCS, or a custom code
    #[arg(long, default_value = "MTT")]
    task_type: TaskType,

    /// Seconds between activity feed polls
    #[arg(long, default_value_t = 15)]
    poll_interval: u64,

    /// Seconds to wait for each task before giving up
    #[arg(long, default_value_t = 1800)]
    poll_timeout: u64,
}

/// Handle the run command
pub async fn handle_run_command(args: RunArgs, config: &Config) -> Result<()> {
    let poll = PollConfig::new(
        Duration::from_secs(args.poll_interval),
        Duration::from_secs(args.poll_timeout),
    );
    poll.validate()?;

    let executor = Arc::new(TaskExecutor::new(
        config.client()?,
        config.credential.clone(),
        args.task_type.clone(),
        poll,
    ));

    info!(tasks = args.tasks.len(), "starting first wave");
    if !run_wave(&executor, &args.tasks).await? {
        bail!("first wave failed; follow-up tasks were not started");
    }

    if !args.then_tasks.is_empty() {
        info!(tasks = args.then_tasks.len(), "starting follow-up wave");
        if !run_wave(&executor, &args.then_tasks).await? {
            bail!("follow-up wave failed");
        }
    }

    Ok(())
}

/// Run one wave of tasks concurrently and print each task's log
///
/// Returns whether every task in the wave finished cleanly.
async fn run_wave(
    executor: &Arc<TaskExecutor<IntegrationClient>>,
    tasks: &[String],
) -> Result<bool> {
    let mut handles = Vec::new();

    for name in tasks {
        let executor = Arc::clone(executor);
        let name = name.clone();
        handles.push(tokio::spawn(
            async move { (name.clone(), executor.execute(&name).await) },
        ));
    }

    let mut all_ok = true;

    for handle in handles {
        let (name, outcome) = handle.await.context("task execution panicked")?;

        match outcome {
            Ok(log) => {
                println!("{}", format!("✓ {name}").green().bold());
                println!("{}", "─".repeat(80).dimmed());
                println!("{log}");
                println!("{}", "─".repeat(80).dimmed());
            }
            Err(e) => {
                all_ok = false;
                println!("{}", format!("✗ {name}: {e}").red());
            }
        }
    }

    Ok(all_ok)
}
