//! Rewind - tic-tac-toe with time travel
//!
//! Play in the terminal or replay a move list headlessly.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use rewind_tui::{Cli, Command, TuiConfig, render_json, render_text, replay, run_tui};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { config } => run_play(config),
        Command::Replay { moves, jump, json } => run_replay(moves, jump, json),
    }
}

/// Run the interactive terminal UI
fn run_play(config_path: PathBuf) -> Result<()> {
    let config = TuiConfig::load_or_default(&config_path)
        .with_context(|| format!("Loading {}", config_path.display()))?;

    // Log to file to avoid interfering with the TUI
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Creating log file {}", config.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized

    info!(config = %config_path.display(), "Starting Rewind");
    run_tui(&config)
}

/// Play a move list and print the resulting view
fn run_replay(moves: Vec<usize>, jump: Option<usize>, json: bool) -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init();

    let view = replay(&moves, jump).view();
    if json {
        println!("{}", render_json(&view)?);
    } else {
        print!("{}", render_text(&view));
    }
    Ok(())
}
