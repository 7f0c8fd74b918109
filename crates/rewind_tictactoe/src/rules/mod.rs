//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single board snapshot. Rules are separated from
//! board storage so the history and contract layers can compose them.

pub mod win;

pub use win::{LINES, detect_winner, winning_line};
