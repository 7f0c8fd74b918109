//! Contract-based validation for tic-tac-toe.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::{MoveError, Placement};
use super::history::GameHistory;
use super::invariants::{HistoryInvariants, InvariantSet, InvariantViolation};
use super::rules::detect_winner;
use super::{Board, Position};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: No line on the board is complete yet.
pub struct GameNotWon;

impl GameNotWon {
    /// Rejects boards that already have a winner.
    #[instrument(skip(board))]
    pub fn check(board: &Board) -> Result<(), MoveError> {
        match detect_winner(board) {
            Some(_) => Err(MoveError::GameAlreadyWon),
            None => Ok(()),
        }
    }
}

/// Precondition: The square at the move's position must be empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Rejects occupied squares.
    #[instrument(skip(board))]
    pub fn check(board: &Board, position: Position) -> Result<(), MoveError> {
        if board.is_empty(position) {
            Ok(())
        } else {
            Err(MoveError::CellOccupied(position))
        }
    }
}

/// Composite precondition: the game is not won and the square is empty.
///
/// The winner check runs first, so clicking an occupied square on a won
/// board reports [`MoveError::GameAlreadyWon`].
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    pub fn check(board: &Board, position: Position) -> Result<(), MoveError> {
        GameNotWon::check(board)?;
        CellIsEmpty::check(board, position)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Placement Contract (single board)
// ─────────────────────────────────────────────────────────────

/// Contract for placing one mark on one board.
///
/// Postcondition: the new board is the old one plus exactly one mark.
pub struct PlacementContract;

impl Contract<Board, Placement> for PlacementContract {
    fn pre(board: &Board, action: &Placement) -> Result<(), MoveError> {
        LegalMove::check(board, action.position)
    }

    fn post(before: &Board, after: &Board) -> Result<(), Vec<InvariantViolation>> {
        match before.placement_to(after) {
            Some(_) => Ok(()),
            None => Err(vec![InvariantViolation::new(
                "Board gains exactly one mark on an empty square",
            )]),
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Play Contract (whole history)
// ─────────────────────────────────────────────────────────────

/// Contract for [`GameHistory::play`].
///
/// Preconditions:
/// - No winner on the current board
/// - Target square is empty
///
/// Postconditions:
/// - All history invariants hold
/// - Snapshots up to the old cursor are kept, everything after is replaced
///   by exactly one new snapshot
/// - The cursor sits on the new last snapshot
pub struct PlayContract;

impl Contract<GameHistory, Position> for PlayContract {
    fn pre(history: &GameHistory, position: &Position) -> Result<(), MoveError> {
        LegalMove::check(history.current_board(), *position)
    }

    fn post(before: &GameHistory, after: &GameHistory) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = HistoryInvariants::check_all(after).err().unwrap_or_default();

        let kept = before.current_move() + 1;
        if after.len() != kept + 1 {
            violations.push(InvariantViolation::new(
                "History holds the kept prefix plus one new snapshot",
            ));
        } else if after.snapshots()[..kept] != before.snapshots()[..kept] {
            violations.push(InvariantViolation::new(
                "Snapshots before the cursor are unchanged",
            ));
        }

        if after.current_move() + 1 != after.len() {
            violations.push(InvariantViolation::new("Cursor points at the newest snapshot"));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            for violation in &violations {
                warn!(description = %violation.description, "Play postcondition violated");
            }
            Err(violations)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Player;

    #[test]
    fn test_precondition_empty_square() {
        let history = GameHistory::new();
        assert!(PlayContract::pre(&history, &Position::Center).is_ok());
    }

    #[test]
    fn test_precondition_occupied_square() {
        let mut history = GameHistory::new();
        history.play(Position::Center);

        assert_eq!(
            PlayContract::pre(&history, &Position::Center),
            Err(MoveError::CellOccupied(Position::Center))
        );
    }

    #[test]
    fn test_precondition_winner_checked_before_occupancy() {
        let board = Board::new()
            .with_mark(Position::TopLeft, Player::X)
            .with_mark(Position::TopCenter, Player::X)
            .with_mark(Position::TopRight, Player::X);

        assert_eq!(
            LegalMove::check(&board, Position::TopLeft),
            Err(MoveError::GameAlreadyWon)
        );
        assert_eq!(
            LegalMove::check(&board, Position::Center),
            Err(MoveError::GameAlreadyWon)
        );
    }

    #[test]
    fn test_placement_postcondition() {
        let before = Board::new();
        let after = before.with_mark(Position::Center, Player::X);

        assert!(PlacementContract::post(&before, &after).is_ok());
        assert!(PlacementContract::post(&before, &before).is_err());
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let before = GameHistory::new();
        let mut after = before.clone();
        after.play(Position::Center);

        assert!(PlayContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_stale_cursor() {
        let before = GameHistory::new();
        let mut after = before.clone();
        after.play(Position::Center);
        after.current = 0;

        assert!(PlayContract::post(&before, &after).is_err());
    }

    #[test]
    fn test_postcondition_detects_rewritten_past() {
        let mut before = GameHistory::new();
        before.play(Position::TopLeft);
        let mut after = before.clone();
        after.play(Position::Center);
        after.snapshots[1] = Board::new().with_mark(Position::BottomRight, Player::X);

        assert!(PlayContract::post(&before, &after).is_err());
    }
}
