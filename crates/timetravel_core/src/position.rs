//! Named cells of the tic-tac-toe board.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// A position on the tic-tac-toe board (0-8, row-major).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
pub enum Position {
    /// Top-left (position 0)
    #[display("Top-left")]
    TopLeft,
    /// Top-center (position 1)
    #[display("Top-center")]
    TopCenter,
    /// Top-right (position 2)
    #[display("Top-right")]
    TopRight,
    /// Middle-left (position 3)
    #[display("Middle-left")]
    MiddleLeft,
    /// Center (position 4)
    #[display("Center")]
    Center,
    /// Middle-right (position 5)
    #[display("Middle-right")]
    MiddleRight,
    /// Bottom-left (position 6)
    #[display("Bottom-left")]
    BottomLeft,
    /// Bottom-center (position 7)
    #[display("Bottom-center")]
    BottomCenter,
    /// Bottom-right (position 8)
    #[display("Bottom-right")]
    BottomRight,
}

impl Position {
    /// All 9 positions in board order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Creates position from zero-based row and column.
    pub fn from_row_col(row: usize, col: usize) -> Option<Self> {
        if row < 3 && col < 3 {
            Self::from_index(row * 3 + col)
        } else {
            None
        }
    }

    /// Zero-based row.
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Zero-based column.
    pub fn col(self) -> usize {
        self.to_index() % 3
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_index_round_trip_matches_declaration_order() {
        for (i, pos) in Position::iter().enumerate() {
            assert_eq!(pos.to_index(), i);
            assert_eq!(Position::from_index(i), Some(pos));
        }
        assert_eq!(Position::from_index(9), None);
    }

    #[test]
    fn test_row_col() {
        assert_eq!((Position::Center.row(), Position::Center.col()), (1, 1));
        assert_eq!((Position::TopRight.row(), Position::TopRight.col()), (0, 2));
        assert_eq!(Position::from_row_col(2, 0), Some(Position::BottomLeft));
        assert_eq!(Position::from_row_col(3, 0), None);
    }
}
