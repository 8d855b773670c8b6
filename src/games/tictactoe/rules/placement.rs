//! Move placement for tic-tac-toe.

use super::super::{Board, MoveError, Player, Position, Square};
use super::win::check_winner;
use tracing::{debug, instrument};

/// Produces the board that results from `player` marking `pos`.
///
/// The input board is left untouched; callers receive a fresh copy.
///
/// # Errors
///
/// - `MoveError::SquareOccupied` if the square already holds a mark.
/// - `MoveError::GameOver` if the board already has a winner.
#[instrument(skip(board))]
pub fn apply_move(board: &Board, pos: Position, player: Player) -> Result<Board, MoveError> {
    if !board.is_empty(pos) {
        debug!("Rejected move on occupied square");
        return Err(MoveError::SquareOccupied(pos));
    }

    if check_winner(board).is_some() {
        debug!("Rejected move after game over");
        return Err(MoveError::GameOver);
    }

    Ok(board.with(pos, Square::Occupied(player)))
}
