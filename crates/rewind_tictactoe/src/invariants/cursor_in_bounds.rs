//! Cursor invariant: the current move always names a real snapshot.

use super::super::GameHistory;
use super::Invariant;

/// Invariant: `0 <= current_move < len(history)`.
pub struct CursorInBoundsInvariant;

impl Invariant<GameHistory> for CursorInBoundsInvariant {
    fn holds(history: &GameHistory) -> bool {
        history.current_move() < history.len()
    }

    fn description() -> &'static str {
        "Current move points inside the history"
    }
}
