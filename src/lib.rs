//! Strictly Timetravel - tic-tac-toe with move history and time travel.
//!
//! # Architecture
//!
//! - **Games**: board, win detection, move placement and the snapshot
//!   history with its cursor
//! - **Replay**: headless driver that applies a script of clicks and jumps
//! - **TUI**: ratatui front end over the same [`Game`]
//! - **Config**: optional TOML settings
//!
//! # Example
//!
//! ```
//! use strictly_timetravel::{Game, Player, Position, Status};
//!
//! let mut game = Game::new();
//! game.click(Position::Center);
//! game.click(Position::TopLeft);
//! assert_eq!(game.status(), Status::NextPlayer(Player::X));
//!
//! // Go back one move and take a different branch.
//! game.jump_to(1).unwrap();
//! game.click(Position::BottomRight);
//! assert_eq!(game.history().len(), 3);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod games;

pub mod config;
pub mod replay;
pub mod tui;

// Crate-level exports - Configuration
pub use config::{Config, ConfigError};

// Crate-level exports - Replay
pub use replay::{ReplayError, Step};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, Game, History, HistoryError, Move, MoveEntry, MoveError, Player, Position, Square,
    Status, invariants, rules,
};
