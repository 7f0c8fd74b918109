//! Tic-tac-toe with a jumpable move history.
//!
//! # Architecture
//!
//! - **Rules**: win detection over a single board ([`detect_winner`])
//! - **Board state**: pure derivations of turn, status and move
//!   application ([`apply_move`], [`status`], [`turn_for`])
//! - **History**: the snapshot list and cursor ([`GameHistory`])
//! - **View**: read-only output for front-ends ([`GameView`])
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{GameHistory, Player, Position};
//!
//! let mut game = GameHistory::new();
//! game.play(Position::TopLeft);
//! game.play(Position::Center);
//! assert_eq!(game.turn(), Player::X);
//!
//! game.jump_to(1);
//! game.play(Position::BottomRight);
//! assert_eq!(game.len(), 3);
//! assert_eq!(game.status().to_string(), "Next player: X");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board_state;
mod history;
mod position;
mod types;
mod view;

pub mod contracts;
pub mod invariants;
pub mod rules;

pub use action::{MoveError, Placement};
pub use board_state::{Status, apply_move, legal_positions, status, turn_for};
pub use history::{GameHistory, MoveEntry};
pub use position::Position;
pub use rules::{detect_winner, winning_line};
pub use types::{Board, Player, Square};
pub use view::GameView;
