//! Status command
//!
//! One login plus one activity-monitor query, printed as a listing.

use anyhow::Result;
use clap::Args;
use colored::*;

use crate::config::Config;
use tug_core::domain::activity::ActivityEntry;

/// Arguments for the status command
#[derive(Args)]
pub struct StatusArgs {
    /// Print the raw feed as JSON instead of a listing
    #[arg(long)]
    json: bool,
}

/// Handle the status command
pub async fn handle_status_command(args: StatusArgs, config: &Config) -> Result<()> {
    let client = config.client()?;
    let session = client.login(&config.credential).await?;
    let entries = client.activity_monitor(&session).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if entries.is_empty() {
        println!("{}", "No tracked runs.".yellow());
        return Ok(());
    }

    println!(
        "{}",
        format!("Found {} tracked run(s):", entries.len()).bold()
    );
    println!();
    for entry in entries {
        print_entry(&entry);
    }

    Ok(())
}

/// Print one activity entry
fn print_entry(entry: &ActivityEntry) {
    let state = if entry.state.is_in_flight() {
        entry.state.to_string().cyan()
    } else {
        entry.state.to_string().green()
    };

    println!("  {} {}", "▸".cyan(), entry.task_name.bold());
    println!("    Task ID: {}", entry.task_id.dimmed());
    println!("    Run:     {}", entry.run_id.to_string().dimmed());
    println!("    State:   {state}");

    if let Some(start) = entry.start_time {
        println!(
            "    Started: {}",
            start.format("%Y-%m-%d %H:%M:%S").to_string().dimmed()
        );
    }
    if let Some(end) = entry.end_time {
        println!(
            "    Ended:   {}",
            end.format("%Y-%m-%d %H:%M:%S").to_string().dimmed()
        );
    }

    println!();
}
