//! Strictly Timetravel - CLI entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use strictly_timetravel::{Config, Game, replay, tui};
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::load_or_default(&cli.config)
        .with_context(|| format!("Loading {}", cli.config.display()))?;

    match cli.command.unwrap_or(Command::Tui) {
        Command::Tui => run_tui(&config),
        Command::Replay { steps, hints } => run_replay(&config, &steps, hints),
    }
}

/// Builds the log filter from `RUST_LOG`, falling back to the config.
fn env_filter(config: &Config) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_filter()))
}

/// Run the terminal UI, logging to a file.
fn run_tui(config: &Config) -> Result<()> {
    // Setup logging to file to avoid interfering with TUI
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Creating log file {}", config.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    debug!(?config, "Configuration");
    tui::run_tui(*config.show_hints())
}

/// Run a replay script and print the result.
#[instrument(skip(config, steps), fields(steps = steps.len()))]
fn run_replay(config: &Config, steps: &[String], hints: bool) -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::io::stderr)
        .try_init();

    let steps = replay::parse_steps(steps)?;
    let mut game = Game::new();
    replay::apply_steps(&mut game, &steps)?;
    info!(moves = game.history().len() - 1, status = %game.status(), "Replay finished");

    print!("{}", replay::render_text(&game, hints));
    Ok(())
}
