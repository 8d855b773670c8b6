//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions over boards. Rules are kept apart
//! from the history so the same checks serve the game, the invariants
//! and the renderers.

pub mod placement;
pub mod win;

pub use placement::apply_move;
pub use win::{LINES, check_winner, winning_line};
