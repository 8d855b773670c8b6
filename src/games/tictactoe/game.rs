//! Top-level game state: a history driven by clicks and jumps.

use super::history::{History, HistoryError};
use super::{Board, Move, Player, Position, rules};
use derive_getters::Getters;
use tracing::{debug, info, instrument, warn};

/// What the status line reports for the viewed snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Status {
    /// The viewed board has a completed line.
    #[display("Winner: {}", _0)]
    Winner(Player),
    /// Nobody has won yet; this player clicks next.
    #[display("Next player: {}", _0)]
    NextPlayer(Player),
}

/// One entry of the move list, one per history snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct MoveEntry {
    /// Snapshot index this entry jumps to.
    index: usize,
    /// The move that produced the snapshot (`None` for game start).
    action: Option<Move>,
    /// Whether this snapshot is the one being viewed.
    current: bool,
}

impl MoveEntry {
    /// Button label: "Go to game start" or "Go to move #N".
    pub fn label(&self) -> String {
        if self.index == 0 {
            "Go to game start".to_string()
        } else {
            format!("Go to move #{}", self.index)
        }
    }
}

/// Tic-tac-toe game with time travel.
///
/// Owns the history; the turn is always derived from the viewed move.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Game {
    history: History,
}

impl Game {
    /// Creates a new game at the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: History::new(),
        }
    }

    /// Handles a click on `pos` for the player to move.
    ///
    /// Clicks on occupied squares, or on a board that already has a
    /// winner, are ignored.
    #[instrument(skip(self), fields(cursor = self.history.cursor()))]
    pub fn click(&mut self, pos: Position) {
        let player = self.history.to_move();
        let next = match rules::apply_move(self.history.current(), pos, player) {
            Ok(next) => next,
            Err(e) => {
                debug!(error = %e, "Click ignored");
                return;
            }
        };
        if let Err(e) = self.history.play(next) {
            warn!(error = %e, "Move rejected by history");
            return;
        }
        info!(%player, position = %pos, move_number = self.history.cursor(), "Move played");
    }

    /// Views the snapshot after move `index` (0 is the game start).
    ///
    /// # Errors
    ///
    /// Returns `HistoryError::OutOfRange` if that move was never played.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, index: usize) -> Result<(), HistoryError> {
        self.history.jump_to(index)
    }

    /// Status of the viewed board.
    pub fn status(&self) -> Status {
        match rules::check_winner(self.history.current()) {
            Some(winner) => Status::Winner(winner),
            None => Status::NextPlayer(self.history.to_move()),
        }
    }

    /// The move list, game start first.
    pub fn moves(&self) -> Vec<MoveEntry> {
        let snapshots = self.history.snapshots();
        (0..snapshots.len())
            .map(|index| MoveEntry {
                index,
                action: index
                    .checked_sub(1)
                    .and_then(|prev| Move::between(&snapshots[prev], &snapshots[index])),
                current: index == self.history.cursor(),
            })
            .collect()
    }

    /// The winning line on the viewed board, if any.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        rules::winning_line(self.history.current())
    }

    /// The full history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// The viewed board.
    pub fn current_board(&self) -> &Board {
        self.history.current()
    }

    /// Index of the viewed move.
    pub fn current_move(&self) -> usize {
        self.history.cursor()
    }
}
