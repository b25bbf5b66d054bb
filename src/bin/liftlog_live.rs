// ABOUTME: liftlog-live CLI - replays recorded workouts through the live-activity projector
// ABOUTME: Prints every host event as a JSON line, or renders the final widget view and totals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Replay a session, printing host events as JSON lines
//! liftlog-live replay session.json
//!
//! # Show what the widget would display for the final state
//! liftlog-live render session.json --unit kg
//! ```

use anyhow::Result;
use chrono::Utc;
use clap::{Parser, Subcommand};
use liftlog::{
    config::{LiveActivityConfig, WeightUnit},
    host::LoggingHost,
    logging::LoggingConfig,
    presentation::{elapsed, format_countdown, format_totals, rest_remaining, ActivityView},
    projector::LiveActivityProjector,
    replay::ReplayScript,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "liftlog-live",
    about = "liftlog live-activity replay tool",
    long_about = "Replay recorded workout sessions through the live-activity projector and inspect the snapshots it produces."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable verbose logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Drive a projector through a session script and print host events
    Replay {
        /// Path to the session script (JSON)
        script: PathBuf,
    },
    /// Print the widget view for the script's final state
    Render {
        /// Path to the session script (JSON)
        script: PathBuf,

        /// Weight unit override (lb or kg)
        #[arg(long)]
        unit: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging.level = "debug".to_owned();
    }
    logging.init()?;

    let config = LiveActivityConfig::from_env();

    match cli.command {
        Command::Replay { script } => replay(&script, config).await,
        Command::Render { script, unit } => {
            let unit = unit.map_or(config.weight_unit, |value| {
                WeightUnit::from_str_or_default(&value)
            });
            render(&script, unit).await
        }
    }
}

async fn replay(path: &Path, config: LiveActivityConfig) -> Result<()> {
    let script = ReplayScript::load(path).await?;
    let (host, mut events) = LoggingHost::with_events();
    let projector = LiveActivityProjector::new(Arc::new(host), config);

    let summary = script.run(&projector).await?;
    drop(projector);

    while let Some(event) = events.recv().await {
        println!("{}", serde_json::to_string(&event)?);
    }

    info!(
        started = summary.started,
        updates = summary.updates_pushed,
        ended = summary.ended,
        "Replay finished"
    );
    Ok(())
}

async fn render(path: &Path, unit: WeightUnit) -> Result<()> {
    let script = ReplayScript::load(path).await?;
    let snapshot = script.final_snapshot();
    let view = ActivityView::from_snapshot(&snapshot, unit);
    let now = Utc::now();

    println!("{}", view.title);
    println!("{}", view.headline);
    println!("{}", view.detail);
    println!("{}", format_totals(&script.final_totals(), unit));
    println!("Elapsed {}", format_countdown(elapsed(&snapshot, now)));
    if let Some(remaining) = rest_remaining(&snapshot, now) {
        println!("Rest {}", format_countdown(remaining));
    }
    Ok(())
}
