//! First-class invariants for the move history.
//!
//! Invariants are logical properties that must hold throughout a game.
//! They are testable independently and checked after every accepted move
//! in debug builds.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn collect<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn finish(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        collect::<S, I1>(state, &mut violations);
        collect::<S, I2>(state, &mut violations);
        collect::<S, I3>(state, &mut violations);
        finish(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        collect::<S, I1>(state, &mut violations);
        collect::<S, I2>(state, &mut violations);
        finish(violations)
    }
}

pub mod cursor_in_bounds;
pub mod extends_by_one;
pub mod root_empty;

pub use cursor_in_bounds::CursorInBoundsInvariant;
pub use extends_by_one::ExtendsByOneInvariant;
pub use root_empty::RootEmptyInvariant;

/// All history invariants as a composable set.
pub type HistoryInvariants = (
    RootEmptyInvariant,
    CursorInBoundsInvariant,
    ExtendsByOneInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, GameHistory, Player, Position};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        assert!(HistoryInvariants::check_all(&GameHistory::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_jump_and_branch() {
        let mut history = GameHistory::new();
        for pos in [Position::TopLeft, Position::Center, Position::TopRight] {
            history.play(pos);
        }
        history.jump_to(1);
        history.play(Position::BottomRight);

        assert!(HistoryInvariants::check_all(&history).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        let mut history = GameHistory::new();
        history.play(Position::Center);
        history.snapshots[0] = Board::new().with_mark(Position::TopLeft, Player::O);
        history.current = 7;

        let violations = HistoryInvariants::check_all(&history).unwrap_err();
        assert_eq!(violations.len(), 3);
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (RootEmptyInvariant, CursorInBoundsInvariant);
        assert!(TwoInvariants::check_all(&GameHistory::new()).is_ok());
    }
}
