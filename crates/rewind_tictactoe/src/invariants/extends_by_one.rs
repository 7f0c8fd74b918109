//! Step invariant: each snapshot is its predecessor plus one mark.

use super::super::{GameHistory, turn_for};
use super::Invariant;

/// Invariant: Snapshot `i` equals snapshot `i - 1` plus exactly one mark,
/// placed by the player whose turn move `i - 1` was.
///
/// Together with [`super::RootEmptyInvariant`] this means every snapshot
/// is reachable by legal alternating play from the empty board, and that
/// a mark once placed is never removed or changed.
pub struct ExtendsByOneInvariant;

impl Invariant<GameHistory> for ExtendsByOneInvariant {
    fn holds(history: &GameHistory) -> bool {
        history
            .snapshots()
            .windows(2)
            .enumerate()
            .all(|(step, pair)| {
                pair[0]
                    .placement_to(&pair[1])
                    .is_some_and(|placement| placement.player == turn_for(step))
            })
    }

    fn description() -> &'static str {
        "Each snapshot adds one mark for the player on turn"
    }
}
