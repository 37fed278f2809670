//! Turning a cell click into the next board.

use crate::rules::winner;
use crate::{Board, Player, Position, Square};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// What became of a click on a cell.
///
/// Rejected clicks are not errors: the board simply stays as it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum ClickOutcome {
    /// The mark was placed and recorded as a new move.
    #[display("{_0} played {_1}")]
    Played(Player, Position),
    /// The cell already holds a mark.
    #[display("{_0} is already occupied")]
    Occupied(Position),
    /// The displayed board already has a winner.
    #[display("Game is already over")]
    GameOver,
}

/// Board that results from `player` clicking `pos` on `board`.
///
/// Returns the rejecting [`ClickOutcome`] instead when the cell is taken or
/// the board already has a winner.
#[instrument(skip(board))]
pub fn board_after_click(
    board: &Board,
    pos: Position,
    player: Player,
) -> Result<Board, ClickOutcome> {
    if !board.is_empty(pos) {
        debug!("Ignoring click on occupied square");
        return Err(ClickOutcome::Occupied(pos));
    }
    if winner(board).is_some() {
        debug!("Ignoring click after win");
        return Err(ClickOutcome::GameOver);
    }
    Ok(board.with(pos, Square::Occupied(player)))
}
