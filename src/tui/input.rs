//! Keyboard and mouse translation into app messages.

use super::layout::{Areas, history_offset};
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use timetravel_core::Position;

/// Which panel the keyboard drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    #[default]
    Board,
    /// Arrow keys move the history selection.
    History,
}

impl Focus {
    /// The other panel.
    pub fn toggle(self) -> Self {
        match self {
            Focus::Board => Focus::History,
            Focus::History => Focus::Board,
        }
    }
}

/// What an input event asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Leave the app.
    Quit,
    /// Switch keyboard focus between board and history.
    ToggleFocus,
    /// Flip the history list between oldest-first and newest-first.
    ToggleOrder,
    /// Move the board cursor.
    MoveCursor(KeyCode),
    /// Move the history selection by this many rows.
    MoveSelection(isize),
    /// Click the cell under the cursor.
    ClickCursor,
    /// Click this cell.
    ClickCell(Position),
    /// Jump to the entry on this display row.
    JumpRow(usize),
    /// Jump to the selected display row.
    JumpSelected,
    /// Step back one move.
    Undo,
    /// Step forward one move.
    Redo,
}

/// Moves cursor based on arrow keys, stopping at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Up | KeyCode::Char('k') => (row.saturating_sub(1), col),
        KeyCode::Down | KeyCode::Char('j') => (row + 1, col),
        KeyCode::Left | KeyCode::Char('h') => (row, col.saturating_sub(1)),
        KeyCode::Right | KeyCode::Char('l') => (row, col + 1),
        _ => (row, col),
    };
    Position::from_row_col(row, col).unwrap_or(cursor)
}

/// Translates a key press.
pub fn key_message(key: KeyEvent, focus: Focus) -> Option<Message> {
    let message = match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Message::Quit,
        KeyCode::Tab | KeyCode::BackTab => Message::ToggleFocus,
        KeyCode::Char('o') => Message::ToggleOrder,
        KeyCode::Char('u') => Message::Undo,
        KeyCode::Char('r') => Message::Redo,
        KeyCode::Char(c @ '1'..='9') => {
            let index = c.to_digit(10)? as usize - 1;
            Message::ClickCell(Position::from_index(index)?)
        }
        KeyCode::Enter | KeyCode::Char(' ') => match focus {
            Focus::Board => Message::ClickCursor,
            Focus::History => Message::JumpSelected,
        },
        KeyCode::Up | KeyCode::Char('k') if focus == Focus::History => Message::MoveSelection(-1),
        KeyCode::Down | KeyCode::Char('j') if focus == Focus::History => Message::MoveSelection(1),
        code @ (KeyCode::Up
        | KeyCode::Down
        | KeyCode::Left
        | KeyCode::Right
        | KeyCode::Char('h' | 'j' | 'k' | 'l')) => Message::MoveCursor(code),
        _ => return None,
    };
    Some(message)
}

/// Translates a mouse event; only left presses on a cell or history row count.
///
/// `selected` is the current history selection, needed to undo the list's
/// scroll offset.
pub fn mouse_message(mouse: MouseEvent, areas: &Areas, selected: usize) -> Option<Message> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return None;
    }
    if let Some(pos) = areas.cell_at(mouse.column, mouse.row) {
        return Some(Message::ClickCell(pos));
    }
    let row = areas.history_row_at(mouse.column, mouse.row)?;
    let offset = history_offset(selected, areas.visible_history_rows());
    Some(Message::JumpRow(offset + row))
}
