//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single [`Board`](crate::Board) snapshot. Nothing
//! here knows about history; the game and view layers feed whichever board
//! is currently displayed.

pub mod draw;
pub mod status;
pub mod win;

pub use draw::filled_count;
pub use status::{Status, status};
pub use win::{LINES, winner, winning_line};
