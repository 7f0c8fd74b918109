//! Pure derivations over a single board snapshot.
//!
//! Nothing here owns state. Turn, status and move application are
//! functions of their explicit inputs so the history can recompute them on
//! every read.

use super::action::{MoveError, Placement};
use super::contracts::{Contract, LegalMove, PlacementContract};
use super::rules::detect_winner;
use super::{Board, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Returns whose turn it is at the given history index.
///
/// X moves on even indices, O on odd ones.
pub fn turn_for(current_move: usize) -> Player {
    if current_move % 2 == 0 {
        Player::X
    } else {
        Player::O
    }
}

/// What the status line reports for a board.
///
/// There is no draw variant: a full board without a winner keeps
/// reporting the player who would move next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Status {
    /// A line is complete.
    #[display("Winner: {}!", _0)]
    Winner(Player),
    /// No line is complete; this player moves next.
    #[display("Next player: {}", _0)]
    NextPlayer(Player),
}

impl Status {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Status::Winner(player) => Some(*player),
            Status::NextPlayer(_) => None,
        }
    }
}

/// Derives the status line for a board and the player on turn.
pub fn status(board: &Board, turn: Player) -> Status {
    match detect_winner(board) {
        Some(winner) => Status::Winner(winner),
        None => Status::NextPlayer(turn),
    }
}

/// Places `mark` at `position`, returning the new board.
///
/// # Errors
///
/// - [`MoveError::GameAlreadyWon`] if the board already has a winner.
/// - [`MoveError::CellOccupied`] if the square is taken.
#[instrument(skip(board), fields(board = %board))]
pub fn apply_move(board: &Board, position: Position, mark: Player) -> Result<Board, MoveError> {
    let placement = Placement::new(mark, position);
    PlacementContract::pre(board, &placement)?;

    let next = board.with_mark(position, mark);
    debug_assert!(
        PlacementContract::post(board, &next).is_ok(),
        "placement must add exactly one mark"
    );
    debug!(%placement, "Placement applied");
    Ok(next)
}

/// Positions where a move would currently be accepted.
///
/// Empty once the board has a winner.
pub fn legal_positions(board: &Board) -> Vec<Position> {
    Position::ALL
        .iter()
        .copied()
        .filter(|&pos| LegalMove::check(board, pos).is_ok())
        .collect()
}
