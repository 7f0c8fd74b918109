//! Application state and key handling.

use crate::config::DisplayConfig;
use crate::input::{cell_for_key, move_cursor};
use crossterm::event::KeyCode;
use rewind_tictactoe::{GameHistory, GameView, Position};
use tracing::{debug, instrument};

/// Which panel receives arrow keys and Enter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The 3x3 board.
    Board,
    /// The move history list.
    History,
}

/// What the event loop should do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep running.
    Continue,
    /// Leave the UI.
    Quit,
}

/// Main application state.
///
/// The game itself lives in [`GameHistory`]; this struct only adds what
/// the terminal needs on top: a board cursor, a list selection and focus.
pub struct App {
    game: GameHistory,
    config: DisplayConfig,
    cursor: Position,
    selected: usize,
    focus: Focus,
}

impl App {
    /// Creates a new application.
    pub fn new(config: DisplayConfig) -> Self {
        Self {
            game: GameHistory::new(),
            config,
            cursor: Position::Center,
            selected: 0,
            focus: Focus::Board,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &GameHistory {
        &self.game
    }

    /// Read-only output for the renderer.
    pub fn view(&self) -> GameView {
        self.game.view()
    }

    /// Display settings.
    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Highlighted entry in the move list.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Panel with keyboard focus.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Applies one key press.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyCode) -> Control {
        if let Some(pos) = cell_for_key(key) {
            self.play(pos);
            return Control::Continue;
        }

        match key {
            KeyCode::Char('q') | KeyCode::Esc => return Control::Quit,
            KeyCode::Char('r') => self.restart(),
            KeyCode::Tab => self.toggle_focus(),
            _ => match self.focus {
                Focus::Board => self.handle_board_key(key),
                Focus::History => self.handle_history_key(key),
            },
        }
        Control::Continue
    }

    fn handle_board_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor),
            _ => self.cursor = move_cursor(self.cursor, key),
        }
    }

    fn handle_history_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Up => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down => self.selected = (self.selected + 1).min(self.game.len() - 1),
            KeyCode::Enter | KeyCode::Char(' ') => self.game.jump_to(self.selected),
            _ => {}
        }
    }

    fn play(&mut self, pos: Position) {
        debug!(position = %pos, "Cell selected");
        self.cursor = pos;
        self.game.play(pos);
        self.selected = self.game.current_move();
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Board => Focus::History,
            Focus::History => {
                self.selected = self.game.current_move();
                Focus::Board
            }
        };
    }

    /// Restarts the game.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.game.restart();
        self.cursor = Position::Center;
        self.selected = 0;
        self.focus = Focus::Board;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rewind_tictactoe::{Player, Square};

    fn app() -> App {
        App::new(DisplayConfig::default())
    }

    fn press(app: &mut App, keys: &[KeyCode]) {
        for &key in keys {
            assert_eq!(app.handle_key(key), Control::Continue);
        }
    }

    #[test]
    fn test_digit_plays_cell() {
        let mut app = app();
        press(&mut app, &[KeyCode::Char('1')]);

        assert_eq!(app.game().current_board().get(Position::TopLeft), Square::Occupied(Player::X));
        assert_eq!(app.cursor(), Position::TopLeft);
        assert_eq!(app.selected(), 1);
    }

    #[test]
    fn test_cursor_and_enter_play() {
        let mut app = app();
        press(&mut app, &[KeyCode::Up, KeyCode::Right, KeyCode::Enter]);

        assert_eq!(app.game().current_board().get(Position::TopRight), Square::Occupied(Player::X));
        assert_eq!(app.game().turn(), Player::O);
    }

    #[test]
    fn test_occupied_cell_ignored() {
        let mut app = app();
        press(&mut app, &[KeyCode::Char('5'), KeyCode::Char('5')]);

        assert_eq!(app.game().len(), 2);
        assert_eq!(app.view().status_text(), "Next player: O");
    }

    #[test]
    fn test_history_jump_and_branch() {
        let mut app = app();
        press(
            &mut app,
            &[KeyCode::Char('1'), KeyCode::Char('4'), KeyCode::Char('2')],
        );
        assert_eq!(app.selected(), 3);

        press(&mut app, &[KeyCode::Tab, KeyCode::Up, KeyCode::Up, KeyCode::Enter]);
        assert_eq!(app.focus(), Focus::History);
        assert_eq!(app.game().current_move(), 1);
        assert_eq!(app.game().len(), 4);

        press(&mut app, &[KeyCode::Char('5')]);
        assert_eq!(app.game().len(), 3);
        assert_eq!(app.game().current_board().get(Position::Center), Square::Occupied(Player::O));
        assert_eq!(app.selected(), 2);
    }

    #[test]
    fn test_history_selection_clamped() {
        let mut app = app();
        press(&mut app, &[KeyCode::Char('1'), KeyCode::Tab]);
        press(&mut app, &[KeyCode::Down, KeyCode::Down, KeyCode::Down]);
        assert_eq!(app.selected(), 1);

        press(&mut app, &[KeyCode::Up, KeyCode::Up, KeyCode::Up]);
        assert_eq!(app.selected(), 0);
    }

    #[test]
    fn test_tab_back_resyncs_selection() {
        let mut app = app();
        press(&mut app, &[KeyCode::Char('1'), KeyCode::Char('2'), KeyCode::Tab, KeyCode::Up, KeyCode::Tab]);

        assert_eq!(app.focus(), Focus::Board);
        assert_eq!(app.selected(), 2);
        assert_eq!(app.game().current_move(), 2);
    }

    #[test]
    fn test_restart_and_quit() {
        let mut app = app();
        press(&mut app, &[KeyCode::Char('1'), KeyCode::Char('r')]);
        assert_eq!(app.game(), &GameHistory::new());
        assert_eq!(app.selected(), 0);

        assert_eq!(app.handle_key(KeyCode::Char('q')), Control::Quit);
        assert_eq!(app.handle_key(KeyCode::Esc), Control::Quit);
    }
}
