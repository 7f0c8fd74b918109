//! Root invariant: the first snapshot is the empty board.

use super::super::{Board, GameHistory};
use super::Invariant;

/// Invariant: Snapshot 0 is always the all-empty board.
///
/// Jumping to move 0 must always show a fresh game, no matter how many
/// branches were played and discarded since.
pub struct RootEmptyInvariant;

impl Invariant<GameHistory> for RootEmptyInvariant {
    fn holds(history: &GameHistory) -> bool {
        history.snapshots().first() == Some(&Board::new())
    }

    fn description() -> &'static str {
        "First snapshot is the empty board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position};

    #[test]
    fn test_new_game_holds() {
        assert!(RootEmptyInvariant::holds(&GameHistory::new()));
    }

    #[test]
    fn test_holds_after_branching_from_start() {
        let mut history = GameHistory::new();
        history.play(Position::Center);
        history.jump_to(0);
        history.play(Position::TopLeft);

        assert!(RootEmptyInvariant::holds(&history));
    }

    #[test]
    fn test_marked_root_violates() {
        let mut history = GameHistory::new();
        history.snapshots[0] = Board::new().with_mark(Position::Center, Player::X);

        assert!(!RootEmptyInvariant::holds(&history));
    }

    #[test]
    fn test_missing_root_violates() {
        let mut history = GameHistory::new();
        history.snapshots.clear();

        assert!(!RootEmptyInvariant::holds(&history));
    }
}
