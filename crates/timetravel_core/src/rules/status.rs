//! Status line derivation.

use crate::Player;
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// What the status line says about the displayed board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Status {
    /// A player completed a line.
    #[display("Winner: {_0}")]
    Winner(Player),
    /// Every square is filled and nobody won.
    #[display("Draw")]
    Draw,
    /// The game goes on with this player to move.
    #[display("Next player: {_0}")]
    NextPlayer(Player),
}

impl Status {
    /// Won and drawn games accept no further moves.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Status::NextPlayer(_))
    }
}

/// Derives the status from a winner, the filled count and the player to move.
///
/// A winner takes precedence over a full board.
pub fn status(winner: Option<Player>, filled_count: usize, next_player: Player) -> Status {
    match winner {
        Some(player) => Status::Winner(player),
        None if filled_count >= 9 => Status::Draw,
        None => Status::NextPlayer(next_player),
    }
}
