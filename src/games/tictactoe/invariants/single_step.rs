//! Single-step invariant: consecutive snapshots differ by one placed mark.

use super::super::{History, Move};
use super::Invariant;

/// Invariant: the history starts empty and each snapshot adds exactly
/// one mark to its predecessor.
///
/// Together with [`CursorInRangeInvariant`](super::CursorInRangeInvariant)
/// this also means snapshot `i` holds exactly `i` marks.
pub struct SingleStepInvariant;

impl Invariant<History> for SingleStepInvariant {
    fn holds(history: &History) -> bool {
        let starts_empty = history
            .snapshots
            .first()
            .is_some_and(|board| board.occupied() == 0);

        starts_empty
            && history
                .snapshots
                .windows(2)
                .all(|pair| Move::between(&pair[0], &pair[1]).is_some())
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly one mark to the previous one"
    }
}
