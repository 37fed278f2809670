//! Tic-tac-toe with a time-travel move history.
//!
//! # Architecture
//!
//! - **Rules**: pure functions over one board (winner, fill count, status)
//! - **Store**: every board snapshot plus the index on display
//! - **Game**: playing moves (discarding any undone future) and jumping
//! - **View**: values derived from the store for rendering
//!
//! # Example
//!
//! ```
//! use timetravel_core::{Game, Position};
//!
//! let mut game = Game::new();
//! game.click(Position::Center);
//! assert_eq!(game.view().status().to_string(), "Next player: O");
//!
//! game.jump(0);
//! game.click(Position::TopLeft);
//! assert_eq!(game.store().history().len(), 2);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod click;
mod game;
mod history;
mod position;
mod store;
mod types;
mod view;

pub mod invariants;
pub mod rules;

pub use action::{Action, ActionOutcome};
pub use click::{ClickOutcome, board_after_click};
pub use game::Game;
pub use history::History;
pub use position::Position;
pub use rules::Status;
pub use store::HistoryStore;
pub use types::{Board, Player, Square};
pub use view::{GameView, HistoryEntry};
