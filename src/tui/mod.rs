//! Terminal UI: nine clickable cells, a status line and history buttons.

pub mod app;
pub mod input;
pub mod layout;
pub mod ui;

use crate::config::AppConfig;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::{debug, error, info, instrument};

pub use app::App;

/// Restores the terminal on drop, including on early return or panic unwind.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)
            .context("Failed to enter alternate screen")?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        debug!("Restoring terminal");
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
    }
}

/// Runs the interactive game until the user quits.
#[instrument(skip(config))]
pub fn run_tui(config: AppConfig) -> Result<()> {
    info!("Starting TUI");

    let guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    let mut app = App::new(config);

    let res = run_app(&mut terminal, &mut app);

    terminal.show_cursor()?;
    drop(guard);

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!(moves = app.game().store().history().len().saturating_sub(1), "TUI finished");
    res
}

/// Event loop: draw, wait for one input event, handle it to completion.
fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    let tick = Duration::from_millis(*app.config().tick_rate_ms());

    while !app.should_quit() {
        let mut areas = None;
        terminal.draw(|f| areas = Some(ui::draw(f, app)))?;

        if event::poll(tick)? {
            let event = event::read()?;
            if let Some(areas) = &areas {
                app.handle_event(&event, areas);
            }
        }
    }
    Ok(())
}
