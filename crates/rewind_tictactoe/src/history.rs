//! Snapshot history with time travel.
//!
//! [`GameHistory`] is the only stateful piece of the game. It keeps every
//! board reached so far plus a cursor, and derives everything else (turn,
//! status, move list) from the snapshot under the cursor.

use super::board_state::{Status, apply_move, status, turn_for};
use super::rules::{detect_winner, winning_line};
use super::view::GameView;
use super::{Board, Player, Position};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

#[cfg(debug_assertions)]
use super::contracts::{Contract, PlayContract};

/// One entry in the jumpable move list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct MoveEntry {
    /// History index this entry jumps to.
    move_number: usize,
    /// Button text for the entry.
    label: String,
}

impl MoveEntry {
    /// Builds the entry for a history index.
    pub fn for_move(move_number: usize) -> Self {
        let label = if move_number == 0 {
            "Go to game start".to_string()
        } else {
            format!("Go to move #{}", move_number)
        };
        Self { move_number, label }
    }
}

/// Ordered board snapshots plus the index of the one being shown.
///
/// Snapshot 0 is always the empty board and the cursor always points at
/// an existing snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameHistory {
    pub(crate) snapshots: Vec<Board>,
    pub(crate) current: usize,
}

impl GameHistory {
    /// Creates a history holding only the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            snapshots: vec![Board::new()],
            current: 0,
        }
    }

    /// Plays the player on turn at `position`.
    ///
    /// Illegal moves (occupied square, board already won) are silently
    /// ignored. A legal move discards every snapshot after the cursor,
    /// appends the new board and moves the cursor onto it.
    #[instrument(skip(self), fields(current_move = self.current))]
    pub fn play(&mut self, position: Position) {
        let turn = self.turn();
        let next = match apply_move(self.current_board(), position, turn) {
            Ok(board) => board,
            Err(error) => {
                debug!(%error, "Move ignored");
                return;
            }
        };

        #[cfg(debug_assertions)]
        let before = self.clone();

        let kept = &self.snapshots[..=self.current];
        let mut snapshots = Vec::with_capacity(kept.len() + 1);
        snapshots.extend_from_slice(kept);
        snapshots.push(next);

        let discarded = self.snapshots.len() - kept.len();
        self.snapshots = snapshots;
        self.current = self.snapshots.len() - 1;
        debug!(player = %turn, discarded, current_move = self.current, "Move played");

        #[cfg(debug_assertions)]
        debug_assert!(
            PlayContract::post(&before, self).is_ok(),
            "play must keep history invariants"
        );
    }

    /// Moves the cursor to snapshot `move_number`.
    ///
    /// The snapshots themselves are left untouched.
    ///
    /// # Panics
    ///
    /// Panics if `move_number` is not an index into the history. Callers
    /// only offer indices taken from [`GameHistory::move_list`].
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, move_number: usize) {
        assert!(
            move_number < self.snapshots.len(),
            "move {} is outside a history of {} snapshots",
            move_number,
            self.snapshots.len()
        );
        self.current = move_number;
        debug!("Jumped");
    }

    /// Resets to a fresh game.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        info!(discarded = self.snapshots.len() - 1, "Restarting game");
        *self = Self::new();
    }

    /// The snapshot under the cursor.
    pub fn current_board(&self) -> &Board {
        &self.snapshots[self.current]
    }

    /// Index of the snapshot under the cursor.
    pub fn current_move(&self) -> usize {
        self.current
    }

    /// Number of snapshots, including the empty start board.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false: the start board is never removed.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// All snapshots in order.
    pub fn snapshots(&self) -> &[Board] {
        &self.snapshots
    }

    /// The player who moves next from the current snapshot.
    pub fn turn(&self) -> Player {
        turn_for(self.current)
    }

    /// Status line for the current snapshot.
    pub fn status(&self) -> Status {
        status(self.current_board(), self.turn())
    }

    /// Winner on the current snapshot, if any.
    pub fn winner(&self) -> Option<Player> {
        detect_winner(self.current_board())
    }

    /// The completed line on the current snapshot, if any.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        winning_line(self.current_board()).map(|(_, line)| line)
    }

    /// One jump entry per snapshot, recomputed on every call.
    pub fn move_list(&self) -> impl Iterator<Item = MoveEntry> + '_ {
        (0..self.snapshots.len()).map(MoveEntry::for_move)
    }

    /// Everything a presentation layer needs to draw the game.
    pub fn view(&self) -> GameView {
        GameView::from(self)
    }
}

impl Default for GameHistory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Square;

    fn played(positions: &[usize]) -> GameHistory {
        let mut history = GameHistory::new();
        for &index in positions {
            history.play(Position::from_index(index).unwrap());
        }
        history
    }

    #[test]
    fn test_new_history() {
        let history = GameHistory::new();
        assert_eq!(history.len(), 1);
        assert_eq!(history.current_move(), 0);
        assert_eq!(history.current_board(), &Board::new());
        assert_eq!(history.turn(), Player::X);
    }

    #[test]
    fn test_play_appends_and_advances() {
        let history = played(&[0]);

        assert_eq!(history.len(), 2);
        assert_eq!(history.current_move(), 1);
        assert_eq!(history.current_board().get(Position::TopLeft), Square::Occupied(Player::X));
        assert_eq!(history.snapshots()[0], Board::new());
    }

    #[test]
    fn test_jump_keeps_snapshots() {
        let mut history = played(&[0, 3, 1]);
        let snapshots = history.snapshots().to_vec();

        history.jump_to(1);
        assert_eq!(history.current_move(), 1);
        assert_eq!(history.snapshots(), snapshots.as_slice());
        assert_eq!(history.turn(), Player::O);
    }

    #[test]
    fn test_branch_discards_future() {
        let mut history = played(&[0, 3, 1, 4, 2]);
        history.jump_to(1);
        history.play(Position::Center);

        assert_eq!(history.len(), 3);
        assert_eq!(history.current_move(), 2);
        assert_eq!(history.current_board().get(Position::Center), Square::Occupied(Player::O));
        assert_eq!(history.current_board().occupied(), 2);
    }

    #[test]
    #[should_panic(expected = "outside a history")]
    fn test_jump_out_of_range_panics() {
        let mut history = GameHistory::new();
        history.jump_to(1);
    }

    #[test]
    fn test_restart() {
        let mut history = played(&[4, 0, 8]);
        history.restart();
        assert_eq!(history, GameHistory::new());
    }

    #[test]
    fn test_move_list_labels() {
        let history = played(&[4, 0]);
        let labels: Vec<_> = history.move_list().map(|entry| entry.label().clone()).collect();

        assert_eq!(labels, ["Go to game start", "Go to move #1", "Go to move #2"]);
    }

    #[test]
    fn test_move_list_is_restartable() {
        let history = played(&[4, 0, 8]);
        let first: Vec<_> = history.move_list().collect();
        let second: Vec<_> = history.move_list().collect();
        assert_eq!(first, second);
        assert_eq!(*first[3].move_number(), 3);
    }
}
