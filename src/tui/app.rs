//! Application state and logic.

use super::input::{Focus, Message, key_message, mouse_message, move_cursor};
use super::layout::Areas;
use crate::config::AppConfig;
use crossterm::event::{Event, KeyEventKind};
use timetravel_core::{Action, Game, GameView, Position};
use tracing::{debug, info, instrument};

/// Main application state.
///
/// The game owns the truth; `view` is a cache rebuilt whenever the store
/// revision moves.
#[derive(Debug)]
pub struct App {
    game: Game,
    view: GameView,
    config: AppConfig,
    cursor: Position,
    focus: Focus,
    /// Selected history row in display order.
    selected: usize,
    descending: bool,
    message: String,
    should_quit: bool,
}

impl App {
    /// Creates a new application.
    #[instrument(skip(config))]
    pub fn new(config: AppConfig) -> Self {
        let game = Game::new();
        let view = game.view();
        Self {
            game,
            view,
            descending: *config.descending(),
            config,
            cursor: Position::Center,
            focus: Focus::Board,
            selected: 0,
            message: "Click a cell or press 1-9 to play.".to_string(),
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Derived values for the displayed move.
    pub fn view(&self) -> &GameView {
        &self.view
    }

    /// Active configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Panel the keyboard drives.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Selected history row, in display order.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Whether history is listed newest first.
    pub fn descending(&self) -> bool {
        self.descending
    }

    /// Feedback line.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether the loop should stop.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// History index shown on display row `row`.
    pub fn entry_for_row(&self, row: usize) -> Option<usize> {
        let len = self.view.entries().len();
        (row < len).then(|| if self.descending { len - 1 - row } else { row })
    }

    /// Display row of history index `index`.
    pub fn row_for_entry(&self, index: usize) -> usize {
        let len = self.view.entries().len();
        if self.descending {
            len.saturating_sub(1).saturating_sub(index)
        } else {
            index
        }
    }

    /// Handles one terminal event laid out on `areas`.
    pub fn handle_event(&mut self, event: &Event, areas: &Areas) {
        let message = match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => key_message(*key, self.focus),
            Event::Mouse(mouse) => mouse_message(*mouse, areas, self.selected),
            _ => None,
        };
        if let Some(message) = message {
            self.update(message);
        }
    }

    /// Applies a message.
    #[instrument(skip(self))]
    pub fn update(&mut self, message: Message) {
        match message {
            Message::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
            Message::ToggleFocus => self.focus = self.focus.toggle(),
            Message::ToggleOrder => {
                let index = self.entry_for_row(self.selected).unwrap_or(0);
                self.descending = !self.descending;
                self.selected = self.row_for_entry(index);
            }
            Message::MoveCursor(key) => {
                self.focus = Focus::Board;
                self.cursor = move_cursor(self.cursor, key);
            }
            Message::MoveSelection(delta) => {
                let last = self.view.entries().len().saturating_sub(1);
                self.selected = self.selected.saturating_add_signed(delta).min(last);
            }
            Message::ClickCursor => self.dispatch(Action::Click(self.cursor)),
            Message::ClickCell(pos) => {
                self.focus = Focus::Board;
                self.cursor = pos;
                self.dispatch(Action::Click(pos));
            }
            Message::JumpRow(row) => {
                if let Some(index) = self.entry_for_row(row) {
                    self.focus = Focus::History;
                    self.dispatch(Action::Jump(index));
                }
            }
            Message::JumpSelected => {
                if let Some(index) = self.entry_for_row(self.selected) {
                    self.dispatch(Action::Jump(index));
                }
            }
            Message::Undo => {
                let current = self.game.current_move();
                if current > 0 {
                    self.dispatch(Action::Jump(current - 1));
                }
            }
            Message::Redo => {
                let next = self.game.current_move() + 1;
                if next < self.view.entries().len() {
                    self.dispatch(Action::Jump(next));
                } else {
                    self.message = "Nothing to redo".to_string();
                }
            }
        }
    }

    fn dispatch(&mut self, action: Action) {
        let outcome = self.game.dispatch(action);
        debug!(%action, %outcome, "Dispatched");
        self.message = outcome.to_string();
        self.refresh();
    }

    /// Rebuilds the view if the store changed since it was derived.
    pub fn refresh(&mut self) {
        if self.game.store().revision() != self.view.revision() {
            self.view = self.game.view();
            self.selected = self.row_for_entry(self.game.current_move());
            debug!(revision = *self.view.revision(), "View refreshed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;
    use timetravel_core::Player;

    fn app() -> App {
        App::new(AppConfig::default())
    }

    #[test]
    fn test_click_plays_and_refreshes_view() {
        let mut app = app();
        app.update(Message::ClickCell(Position::Center));
        assert_eq!(app.view().status().to_string(), "Next player: O");
        assert_eq!(app.view().entries().len(), 2);
        assert_eq!(app.selected(), 1);
        assert_eq!(app.message(), "X played Center");
    }

    #[test]
    fn test_occupied_click_is_a_no_op() {
        let mut app = app();
        app.update(Message::ClickCell(Position::Center));
        let revision = *app.view().revision();
        app.update(Message::ClickCell(Position::Center));
        assert_eq!(*app.view().revision(), revision);
        assert_eq!(app.message(), "Center is already occupied");
    }

    #[test]
    fn test_undo_redo() {
        let mut app = app();
        app.update(Message::ClickCell(Position::Center));
        app.update(Message::ClickCell(Position::TopLeft));
        app.update(Message::Undo);
        assert_eq!(app.game().current_move(), 1);
        assert_eq!(*app.view().next_player(), Player::O);
        app.update(Message::Redo);
        assert_eq!(app.game().current_move(), 2);
        app.update(Message::Redo);
        assert_eq!(app.game().current_move(), 2);
        assert_eq!(app.message(), "Nothing to redo");
    }

    #[test]
    fn test_descending_rows_map_to_newest_first() {
        let mut app = app();
        app.update(Message::ClickCell(Position::Center));
        app.update(Message::ClickCell(Position::TopLeft));
        app.update(Message::ToggleOrder);
        assert!(app.descending());
        assert_eq!(app.entry_for_row(0), Some(2));
        assert_eq!(app.entry_for_row(2), Some(0));
        assert_eq!(app.entry_for_row(3), None);
        assert_eq!(app.selected(), 0);

        app.update(Message::JumpRow(2));
        assert_eq!(app.game().current_move(), 0);
        assert_eq!(app.focus(), Focus::History);
    }

    #[test]
    fn test_keyboard_history_navigation() {
        let mut app = app();
        app.update(Message::ClickCell(Position::Center));
        app.update(Message::ToggleFocus);
        app.update(Message::MoveSelection(-1));
        app.update(Message::MoveSelection(-1));
        assert_eq!(app.selected(), 0);
        app.update(Message::JumpSelected);
        assert_eq!(app.game().current_move(), 0);
        assert_eq!(app.message(), "Viewing game start");
    }

    #[test]
    fn test_cursor_click() {
        let mut app = app();
        app.update(Message::MoveCursor(KeyCode::Up));
        app.update(Message::ClickCursor);
        assert_eq!(app.game().current_move(), 1);
        assert_eq!(
            app.view().board().get(Position::TopCenter).player(),
            Some(Player::X)
        );
    }

    #[test]
    fn test_quit() {
        let mut app = app();
        app.update(Message::Quit);
        assert!(app.should_quit());
    }
}
