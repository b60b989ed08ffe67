//! Noughts - unified CLI

use anyhow::{Context, Result};
use clap::Parser;
use noughts::{Cli, Command, GameConfig, headless, tui};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Subscriber first so config loading is logged
    match &cli.command {
        Command::Play { log_file } => tui::init_logging(log_file)?,
        Command::Moves { .. } => init_stderr_logging(),
    }

    let config = GameConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?;

    match cli.command {
        Command::Play { .. } => tui::run_tui(config.build_session()),
        Command::Moves { moves, json } => run_moves(&config, &moves, json),
    }
}

/// Logs go to stderr so stdout stays parseable.
fn init_stderr_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();
}

/// Plays a move list and prints the report on stdout.
fn run_moves(config: &GameConfig, moves: &[String], json: bool) -> Result<()> {
    let indices = headless::parse_moves(moves)?;
    debug!(?indices, "Parsed moves");

    let mut session = config.build_session();
    let report = headless::run(&mut session, &indices);
    info!(moves = report.moves.len(), status = ?report.status, "Run complete");

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("Failed to serialize report")?
        );
    } else {
        print!("{}", report.to_text());
    }
    Ok(())
}
