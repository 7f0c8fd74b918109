//! Read-only rendered output for presentation layers.

use super::board_state::Status;
use super::history::{GameHistory, MoveEntry};
use super::{Position, Square};
use derive_getters::Getters;
use serde::Serialize;

/// Snapshot of everything a front-end draws: the nine cells, the status
/// line and the move list.
///
/// Building a view never touches the history, so it can be rebuilt after
/// every event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct GameView {
    /// Cells of the current snapshot in row-major order.
    squares: [Square; 9],
    /// Status of the current snapshot.
    status: Status,
    /// Status rendered as text.
    status_text: String,
    /// Line to highlight when the current snapshot is won.
    winning_line: Option<[Position; 3]>,
    /// Jump entries, one per snapshot.
    moves: Vec<MoveEntry>,
    /// Index into `moves` of the snapshot being shown.
    current_move: usize,
}

impl From<&GameHistory> for GameView {
    fn from(history: &GameHistory) -> Self {
        let status = history.status();
        Self {
            squares: *history.current_board().squares(),
            status,
            status_text: status.to_string(),
            winning_line: history.winning_line(),
            moves: history.move_list().collect(),
            current_move: history.current_move(),
        }
    }
}
