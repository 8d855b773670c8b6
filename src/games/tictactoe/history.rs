//! Board history with a movable cursor.
//!
//! The history is a list of board snapshots starting from the empty
//! board. Playing from an earlier snapshot discards every later one
//! before the new board is appended, so the list always describes a
//! single line of play.

use super::invariants::assert_invariants;
use super::{Board, Move, Player, rules};
use tracing::{debug, instrument};

/// Error returned by history updates and navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum HistoryError {
    /// The requested move index does not exist.
    #[display("Move {} is out of range (history has {} entries)", index, len)]
    OutOfRange {
        /// Requested index.
        index: usize,
        /// Number of snapshots in the history.
        len: usize,
    },

    /// The board is not a legal move by the player to move from the
    /// current snapshot.
    #[display("Board is not a legal move for {} after move {}", player, cursor)]
    NotAMove {
        /// Move index the board was played from.
        cursor: usize,
        /// Player whose mark was expected.
        player: Player,
    },
}

/// Ordered board snapshots plus the index of the one being viewed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    pub(super) snapshots: Vec<Board>,
    pub(super) cursor: usize,
}

impl History {
    /// Creates a history holding only the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            snapshots: vec![Board::new()],
            cursor: 0,
        }
    }

    /// Records `next` as the move after the current snapshot.
    ///
    /// Snapshots after the cursor are dropped first. The cursor ends on
    /// the new board.
    ///
    /// # Errors
    ///
    /// Returns `HistoryError::NotAMove` unless `next` is a legal move for
    /// the player to move. The history is left unchanged.
    #[instrument(skip(self, next), fields(cursor = self.cursor, len = self.snapshots.len()))]
    pub fn play(&mut self, next: Board) -> Result<(), HistoryError> {
        let player = self.to_move();
        if !self.is_legal_next(&next, player) {
            return Err(HistoryError::NotAMove {
                cursor: self.cursor,
                player,
            });
        }

        let discarded = self.snapshots.len() - (self.cursor + 1);
        if discarded > 0 {
            debug!(discarded, "Discarding later moves");
        }
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(next);
        self.cursor = self.snapshots.len() - 1;

        assert_invariants(self);
        Ok(())
    }

    /// Whether `next` is `player` marking one empty square of the current
    /// snapshot while nobody has won yet.
    fn is_legal_next(&self, next: &Board, player: Player) -> bool {
        let current = self.current();
        Move::between(current, next).is_some_and(|action| {
            rules::apply_move(current, action.position, player).as_ref() == Ok(next)
        })
    }

    /// Moves the cursor to `index` without touching any snapshot.
    ///
    /// # Errors
    ///
    /// Returns `HistoryError::OutOfRange` if no snapshot has that index.
    #[instrument(skip(self), fields(len = self.snapshots.len()))]
    pub fn jump_to(&mut self, index: usize) -> Result<(), HistoryError> {
        if index >= self.snapshots.len() {
            return Err(HistoryError::OutOfRange {
                index,
                len: self.snapshots.len(),
            });
        }
        self.cursor = index;
        debug!(cursor = index, "Jumped");
        Ok(())
    }

    /// The snapshot under the cursor.
    pub fn current(&self) -> &Board {
        &self.snapshots[self.cursor]
    }

    /// Index of the snapshot under the cursor.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of snapshots, including the empty starting board.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false: the starting board is never removed.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// All snapshots, oldest first.
    pub fn snapshots(&self) -> &[Board] {
        &self.snapshots
    }

    /// Player to move at the cursor.
    pub fn to_move(&self) -> Player {
        Player::for_move(self.cursor)
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
