//! Command-line interface for strictly_timetravel.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use strictly_timetravel::config::DEFAULT_CONFIG_PATH;

/// Strictly Timetravel - tic-tac-toe with move history
#[derive(Parser, Debug)]
#[command(name = "strictly_timetravel")]
#[command(about = "Tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (optional)
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Subcommand to run (defaults to the terminal UI)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal UI
    Tui,

    /// Apply a script of moves and print the resulting game
    Replay {
        /// Steps: a square 1-9 or name to click, or @N to jump to move N
        #[arg(required = true)]
        steps: Vec<String>,

        /// Show square numbers on empty squares
        #[arg(long)]
        hints: bool,
    },
}
