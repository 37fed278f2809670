//! Fill counting for tic-tac-toe.

use crate::{Board, Square};
use tracing::instrument;

/// Counts the occupied squares.
#[instrument(skip(board))]
pub fn filled_count(board: &Board) -> usize {
    board.squares().iter().filter(|s| **s != Square::Empty).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position};

    #[test]
    fn test_empty_board_count() {
        let board = Board::new();
        assert_eq!(filled_count(&board), 0);
    }

    #[test]
    fn test_partial_board_count() {
        let board = Board::new()
            .with(Position::Center, Square::Occupied(Player::X))
            .with(Position::TopLeft, Square::Occupied(Player::O));
        assert_eq!(filled_count(&board), 2);
    }

    #[test]
    fn test_full_board() {
        let board = Board::from_squares([Square::Occupied(Player::O); 9]);
        assert_eq!(filled_count(&board), 9);
    }
}
