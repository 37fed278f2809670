//! Screen geometry shared by rendering and mouse hit-testing.

use ratatui::layout::{Constraint, Layout, Rect};
use timetravel_core::Position;

/// Width of one board cell, borders included.
pub const CELL_WIDTH: u16 = 7;
/// Height of one board cell, borders included.
pub const CELL_HEIGHT: u16 = 3;

/// Where everything goes for a given terminal size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Areas {
    /// Title line.
    pub title: Rect,
    /// Bordered panel around the board.
    pub board_panel: Rect,
    /// One rect per cell, indexed like [`Position::to_index`].
    pub cells: [Rect; 9],
    /// Bordered panel around the history list.
    pub history_panel: Rect,
    /// Inside of the history panel; one row per visible entry.
    pub history_rows: Rect,
    /// Status line panel.
    pub status: Rect,
    /// Help and feedback line.
    pub footer: Rect,
}

impl Areas {
    /// Splits `area` into the screen regions.
    pub fn compute(area: Rect) -> Self {
        let [title, main, status, footer] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(3 * CELL_HEIGHT + 2),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .areas(area);

        let [board_panel, history_panel] =
            Layout::horizontal([Constraint::Length(3 * CELL_WIDTH + 4), Constraint::Min(20)])
                .areas(main);

        let grid = center(inner(board_panel), 3 * CELL_WIDTH, 3 * CELL_HEIGHT);
        let cells = std::array::from_fn(|i| {
            let pos = Position::ALL[i];
            Rect::new(
                grid.x + pos.col() as u16 * CELL_WIDTH,
                grid.y + pos.row() as u16 * CELL_HEIGHT,
                CELL_WIDTH,
                CELL_HEIGHT,
            )
            .intersection(grid)
        });

        Self {
            title,
            board_panel,
            cells,
            history_panel,
            history_rows: inner(history_panel),
            status,
            footer,
        }
    }

    /// Cell under the screen coordinate, if any.
    pub fn cell_at(&self, column: u16, row: u16) -> Option<Position> {
        self.cells
            .iter()
            .position(|rect| contains(*rect, column, row))
            .and_then(Position::from_index)
    }

    /// Visible history row under the screen coordinate, if any.
    pub fn history_row_at(&self, column: u16, row: u16) -> Option<usize> {
        contains(self.history_rows, column, row).then(|| (row - self.history_rows.y) as usize)
    }

    /// Number of history entries that fit.
    pub fn visible_history_rows(&self) -> usize {
        self.history_rows.height as usize
    }
}

/// First row shown so that display row `selected` stays visible.
pub fn history_offset(selected: usize, visible: usize) -> usize {
    if visible == 0 {
        0
    } else {
        selected.saturating_sub(visible - 1)
    }
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

fn inner(rect: Rect) -> Rect {
    Rect::new(
        rect.x.saturating_add(1),
        rect.y.saturating_add(1),
        rect.width.saturating_sub(2),
        rect.height.saturating_sub(2),
    )
}

fn center(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
