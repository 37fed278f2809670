//! Time-travel tic-tac-toe - CLI entry point.

use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use timetravel_tictactoe::{AppConfig, Cli, Command, run_script, tui};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?;

    match cli.command() {
        Command::Play {
            descending,
            hide_locations,
        } => {
            let config = config
                .clone()
                .with_descending(descending || *config.descending())
                .with_show_locations(!hide_locations && *config.show_locations());
            initialize_file_tracing(&config)?;
            tui::run_tui(config)
        }
        Command::Replay { script, json } => {
            initialize_stderr_tracing(&config);
            run_replay(&script, json)
        }
    }
}

/// Runs a script headless and prints the outcome.
#[instrument]
fn run_replay(script: &str, json: bool) -> Result<()> {
    let replay = run_script(script)?;
    info!(steps = replay.steps.len(), "Replay finished");
    if json {
        println!("{}", serde_json::to_string_pretty(&replay.view())?);
    } else {
        print!("{}", replay.render_text());
    }
    Ok(())
}

/// Sends logs to the configured file so they never land on the TUI.
fn initialize_file_tracing(config: &AppConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file()).with_context(|| {
        format!("Failed to create log file {}", config.log_file().display())
    })?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

fn initialize_stderr_tracing(config: &AppConfig) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .try_init();
}
