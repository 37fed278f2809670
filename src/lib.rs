//! Time-travel tic-tac-toe application.
//!
//! Wraps the pure game in [`timetravel_core`] with a terminal front-end and a
//! headless script runner.
//!
//! # Architecture
//!
//! - **CLI**: `play` (interactive) and `replay` (headless)
//! - **Config**: TOML file with defaults for every field
//! - **TUI**: ratatui rendering, crossterm mouse and keyboard input
//! - **Replay**: scripted clicks and jumps, printed as text or JSON

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod replay;
pub mod tui;

pub use cli::{Cli, Command};
pub use config::{AppConfig, ConfigError};
pub use replay::{Replay, ScriptError, parse_script, run_script};
pub use timetravel_core::{
    Action, ActionOutcome, Board, ClickOutcome, Game, GameView, History, HistoryEntry,
    HistoryStore, Player, Position, Square, Status,
};
