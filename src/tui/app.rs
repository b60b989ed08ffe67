//! Application state and key handling for the terminal UI.

use super::input::{digit_position, hit_test, move_cursor};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use noughts_rules::{GameSession, Outcome, Position, Seat, Status};
use ratatui::layout::Rect;
use tracing::{debug, info, instrument};

/// What keystrokes currently mean.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    /// Keys play moves and run commands.
    Normal,
    /// Waiting for `1` or `2` to pick the seat to rename.
    ChoosingSeat,
    /// Typing a new name for `seat`.
    Naming {
        /// Seat being renamed.
        seat: Seat,
        /// Name typed so far.
        buffer: String,
    },
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    session: GameSession,
    cursor: Position,
    mode: InputMode,
    status_message: String,
    should_quit: bool,
}

impl App {
    /// Wraps a configured session.
    pub fn new(session: GameSession) -> Self {
        let mut app = Self {
            session,
            cursor: Position::Center,
            mode: InputMode::Normal,
            status_message: String::new(),
            should_quit: false,
        };
        app.status_message = app.turn_message();
        app
    }

    /// The game session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Highlighted cell.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Current input mode.
    pub fn mode(&self) -> &InputMode {
        &self.mode
    }

    /// Line shown under the board.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles one key press.
    #[instrument(skip(self), fields(mode = ?self.mode))]
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match std::mem::replace(&mut self.mode, InputMode::Normal) {
            InputMode::Normal => self.handle_normal_key(key.code),
            InputMode::ChoosingSeat => self.handle_seat_key(key.code),
            InputMode::Naming { seat, buffer } => self.handle_naming_key(seat, buffer, key.code),
        }
    }

    /// Handles a left click at terminal coordinates.
    pub fn handle_click(&mut self, cells: &[Rect; 9], column: u16, row: u16) {
        if self.mode != InputMode::Normal {
            return;
        }
        if let Some(pos) = hit_test(cells, column, row) {
            self.cursor = pos;
            self.play(pos);
        }
    }

    fn handle_normal_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                self.should_quit = true;
            }
            KeyCode::Char('r') => {
                self.session.reset_game();
                self.status_message = self.turn_message();
            }
            KeyCode::Char('s') => {
                self.session.reset_scores();
                self.status_message = "Scores reset.".to_string();
            }
            KeyCode::Char('n') => {
                self.mode = InputMode::ChoosingSeat;
                self.status_message = "Rename which player? Press 1 or 2.".to_string();
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor),
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, code);
            }
            other => {
                if let Some(pos) = digit_position(other) {
                    self.cursor = pos;
                    self.play(pos);
                }
            }
        }
    }

    fn handle_seat_key(&mut self, code: KeyCode) {
        let seat = match code {
            KeyCode::Char('1') => Seat::One,
            KeyCode::Char('2') => Seat::Two,
            _ => {
                self.status_message = self.turn_message();
                return;
            }
        };
        self.status_message = format!(
            "New name for {} (Enter to confirm, Esc to cancel):",
            self.session.player(seat).name()
        );
        self.mode = InputMode::Naming {
            seat,
            buffer: String::new(),
        };
    }

    fn handle_naming_key(&mut self, seat: Seat, mut buffer: String, code: KeyCode) {
        match code {
            KeyCode::Enter => {
                self.session.rename_player(seat, &buffer);
                self.status_message = self.turn_message();
            }
            KeyCode::Esc => {
                self.status_message = self.turn_message();
            }
            KeyCode::Backspace => {
                buffer.pop();
                self.mode = InputMode::Naming { seat, buffer };
            }
            KeyCode::Char(c) if !c.is_control() => {
                buffer.push(c);
                self.mode = InputMode::Naming { seat, buffer };
            }
            _ => self.mode = InputMode::Naming { seat, buffer },
        }
    }

    fn play(&mut self, pos: Position) {
        let outcome = self.session.play_round(pos.to_index());
        debug!(position = %pos, ?outcome, "Move played");
        match outcome {
            Outcome::Continue | Outcome::Winner { .. } | Outcome::Tie => {
                self.status_message = self.turn_message();
            }
            Outcome::Rejected(reason) => self.status_message = reason.to_string(),
            Outcome::Ignored => {}
        }
    }

    fn turn_message(&self) -> String {
        let current = self.session.current_player();
        match self.session.status() {
            Status::AwaitingMove => format!("{}'s turn ({})", current.name(), current.marker()),
            Status::Won => format!("{} is the winner! Press 'r' for a new round.", current.name()),
            Status::Tied => "It's a tie! Press 'r' for a new round.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_digits_play_moves() {
        let mut app = App::new(GameSession::new());
        type_str(&mut app, "14273");
        assert_eq!(app.session().status(), Status::Won);
        assert_eq!(app.status_message(), "Player One is the winner! Press 'r' for a new round.");
    }

    #[test]
    fn test_rejected_move_shows_reason() {
        let mut app = App::new(GameSession::new());
        type_str(&mut app, "55");
        assert_eq!(app.status_message(), "Position 4 is already occupied");
    }

    #[test]
    fn test_reset_round() {
        let mut app = App::new(GameSession::new());
        type_str(&mut app, "14273r");
        assert_eq!(app.session().status(), Status::AwaitingMove);
        assert_eq!(app.session().player_score(Seat::One), 1);
        assert_eq!(app.status_message(), "Player One's turn (X)");
    }

    #[test]
    fn test_rename_flow() {
        let mut app = App::new(GameSession::new());
        type_str(&mut app, "n2Bobx");
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.mode(), &InputMode::Normal);
        assert_eq!(app.session().player(Seat::Two).name(), "Bob");
    }

    #[test]
    fn test_rename_to_blank_restores_default() {
        let mut app = App::new(GameSession::new());
        type_str(&mut app, "n1Zed");
        press(&mut app, KeyCode::Enter);
        type_str(&mut app, "n1");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.session().player(Seat::One).name(), "Player One");
    }

    #[test]
    fn test_cursor_and_enter() {
        let mut app = App::new(GameSession::new());
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.cursor(), Position::TopLeft);
        assert!(!app.session().board().is_empty(0));
    }

    #[test]
    fn test_quit() {
        let mut app = App::new(GameSession::new());
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit());
    }
}
