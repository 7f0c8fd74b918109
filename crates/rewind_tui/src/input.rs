//! Key decoding: cursor movement and direct cell keys.

use crossterm::event::KeyCode;
use rewind_tictactoe::Position;

/// Moves cursor based on arrow keys.
///
/// The cursor stops at the board edges. Non-arrow keys leave it unchanged.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match key {
        KeyCode::Up => row.checked_sub(1).map(|row| (row, col)),
        KeyCode::Down => Some((row + 1, col)),
        KeyCode::Left => col.checked_sub(1).map(|col| (row, col)),
        KeyCode::Right => Some((row, col + 1)),
        _ => None,
    };

    target
        .and_then(|(row, col)| Position::from_coords(row, col))
        .unwrap_or(cursor)
}

/// Maps the digit keys `1`-`9` to board cells, numbered like a phone
/// keypad read left to right, top to bottom.
pub fn cell_for_key(key: KeyCode) -> Option<Position> {
    match key {
        KeyCode::Char(c) => c
            .to_digit(10)
            .and_then(|digit| (digit as usize).checked_sub(1))
            .and_then(Position::from_index),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_inside_board() {
        assert_eq!(move_cursor(Position::Center, KeyCode::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Down), Position::BottomCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Left), Position::MiddleLeft);
        assert_eq!(move_cursor(Position::Center, KeyCode::Right), Position::MiddleRight);
    }

    #[test]
    fn test_edges_stop_cursor() {
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Left), Position::TopLeft);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Down), Position::BottomRight);
        assert_eq!(move_cursor(Position::MiddleRight, KeyCode::Right), Position::MiddleRight);
    }

    #[test]
    fn test_other_keys_ignored() {
        assert_eq!(move_cursor(Position::Center, KeyCode::Char('x')), Position::Center);
    }

    #[test]
    fn test_digit_keys() {
        assert_eq!(cell_for_key(KeyCode::Char('1')), Some(Position::TopLeft));
        assert_eq!(cell_for_key(KeyCode::Char('5')), Some(Position::Center));
        assert_eq!(cell_for_key(KeyCode::Char('9')), Some(Position::BottomRight));
        assert_eq!(cell_for_key(KeyCode::Char('0')), None);
        assert_eq!(cell_for_key(KeyCode::Char('a')), None);
        assert_eq!(cell_for_key(KeyCode::Enter), None);
    }
}
