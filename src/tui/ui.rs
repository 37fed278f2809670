//! Stateless UI rendering for tic-tac-toe with history.

use super::app::App;
use super::input::Focus;
use super::layout::{Areas, history_offset};
use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use timetravel_core::{GameView, HistoryEntry, Player, Position, Square};

/// Draws the whole screen and returns the layout used, for hit-testing.
pub fn draw(frame: &mut Frame, app: &App) -> Areas {
    let areas = Areas::compute(frame.area());
    let view = app.view();

    let title = Paragraph::new("Tic-Tac-Toe - Time Travel")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, areas.title);

    let board_block = panel("Board", app.focus() == Focus::Board);
    frame.render_widget(board_block, areas.board_panel);
    for pos in Position::ALL {
        draw_cell(frame, &areas, view, pos, app.cursor(), app.focus());
    }

    draw_history(frame, &areas, app);

    let status_style = if view.status().is_terminal() {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };
    let status = Paragraph::new(view.status().to_string())
        .style(status_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, areas.status);

    let footer = Paragraph::new(format!(
        "{} | 1-9/click: play  Tab: focus  u/r: undo/redo  o: order  q: quit",
        app.message()
    ))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, areas.footer);

    areas
}

fn panel(title: &str, focused: bool) -> Block<'_> {
    let border = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(title)
}

fn draw_cell(
    frame: &mut Frame,
    areas: &Areas,
    view: &GameView,
    pos: Position,
    cursor: Position,
    focus: Focus,
) {
    let square = view.board().get(pos);
    let mut style = match square {
        Square::Empty => Style::default().fg(Color::DarkGray),
        Square::Occupied(Player::X) => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        Square::Occupied(Player::O) => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    };
    if view.is_winning_cell(pos) {
        style = style.bg(Color::Green).fg(Color::Black);
    }

    let border = if pos == cursor && focus == Focus::Board {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let cell = Paragraph::new(Line::from(Span::styled(square.symbol(), style)))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(border));
    frame.render_widget(cell, areas.cells[pos.to_index()]);
}

fn draw_history(frame: &mut Frame, areas: &Areas, app: &App) {
    let title = if app.descending() {
        "History (newest first)"
    } else {
        "History"
    };
    frame.render_widget(panel(title, app.focus() == Focus::History), areas.history_panel);

    let visible = areas.visible_history_rows();
    let offset = history_offset(app.selected(), visible);
    let entries = app.view().entries();
    let lines: Vec<Line> = (offset..offset + visible)
        .filter_map(|row| {
            let index = app.entry_for_row(row)?;
            let entry = &entries[index];
            Some(history_line(entry, row == app.selected(), app))
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), areas.history_rows);
}

fn history_line(entry: &HistoryEntry, selected: bool, app: &App) -> Line<'static> {
    let mut style = Style::default();
    if *entry.is_current() {
        style = style.fg(Color::Cyan).add_modifier(Modifier::BOLD);
    }
    if selected && app.focus() == Focus::History {
        style = style.add_modifier(Modifier::REVERSED);
    }

    let marker = if *entry.is_current() { "> " } else { "  " };
    let mut spans = vec![Span::styled(format!("{}{}", marker, entry.label()), style)];
    if *app.config().show_locations() {
        if let Some(pos) = entry.location() {
            spans.push(Span::styled(
                format!("  ({}, {})", pos.row() + 1, pos.col() + 1),
                Style::default().fg(Color::DarkGray),
            ));
        }
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::tui::input::Message;
    use ratatui::{Terminal, backend::TestBackend};

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| {
            draw(f, app);
        })
        .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_fresh_screen() {
        let app = App::new(AppConfig::default());
        let screen = render(&app);
        assert!(screen.contains("Next player: X"));
        assert!(screen.contains("> Go to game start"));
        assert!(!screen.contains("Go to move #1"));
    }

    #[test]
    fn test_history_buttons_and_locations() {
        let mut app = App::new(AppConfig::default());
        app.update(Message::ClickCell(Position::Center));
        app.update(Message::ClickCell(Position::BottomRight));
        let screen = render(&app);
        assert!(screen.contains("Go to move #1  (2, 2)"));
        assert!(screen.contains("> Go to move #2  (3, 3)"));
        assert!(screen.contains("Next player: X"));
    }

    #[test]
    fn test_locations_can_be_hidden() {
        let config = AppConfig::default().with_show_locations(false);
        let mut app = App::new(config);
        app.update(Message::ClickCell(Position::Center));
        assert!(!render(&app).contains("(2, 2)"));
    }

    #[test]
    fn test_winner_shown() {
        let mut app = App::new(AppConfig::default());
        for cell in [0, 3, 1, 4, 2] {
            app.update(Message::ClickCell(Position::ALL[cell]));
        }
        assert!(render(&app).contains("Winner: X"));
    }
}
