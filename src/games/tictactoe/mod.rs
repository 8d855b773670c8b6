//! Tic-tac-toe with move history and time travel.

mod action;
mod game;
mod history;
pub mod invariants;
mod position;
pub mod rules;
mod types;

pub use action::{Move, MoveError};
pub use game::{Game, MoveEntry, Status};
pub use history::{History, HistoryError};
pub use position::Position;
pub use types::{Board, Player, Square};
