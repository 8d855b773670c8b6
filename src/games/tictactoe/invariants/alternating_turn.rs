//! Alternating turn invariant: marks alternate X, O, X, O, ...

use super::super::{History, Move, Player};
use super::Invariant;

/// Invariant: the mark added by snapshot `i + 1` belongs to the player
/// whose turn it was at move `i`.
///
/// Pairs that are not a single placement are left to
/// [`SingleStepInvariant`](super::SingleStepInvariant).
pub struct AlternatingTurnInvariant;

impl Invariant<History> for AlternatingTurnInvariant {
    fn holds(history: &History) -> bool {
        history
            .snapshots
            .windows(2)
            .enumerate()
            .all(|(i, pair)| match Move::between(&pair[0], &pair[1]) {
                Some(action) => action.player == Player::for_move(i),
                None => true,
            })
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
