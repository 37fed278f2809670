//! Ordered board snapshots, oldest first.

use crate::{Board, Position, Square};
use serde::{Deserialize, Serialize};

/// Sequence of board snapshots; index 0 is the empty starting board.
///
/// `History::new` always produces a single-entry history. Nothing stops a
/// caller from building an empty one through [`History::from_boards`]; see
/// [`crate::invariants`] for auditing a history after the fact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    boards: Vec<Board>,
}

impl History {
    /// Creates a history holding only the empty board.
    pub fn new() -> Self {
        Self {
            boards: vec![Board::new()],
        }
    }

    /// Wraps an arbitrary sequence of boards, unchecked.
    pub fn from_boards(boards: Vec<Board>) -> Self {
        Self { boards }
    }

    /// Number of snapshots.
    pub fn len(&self) -> usize {
        self.boards.len()
    }

    /// True when no snapshot is stored (an invalid state).
    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }

    /// Snapshot at `index`.
    pub fn get(&self, index: usize) -> Option<&Board> {
        self.boards.get(index)
    }

    /// All snapshots.
    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    /// Copy of the first `len` snapshots followed by `next`.
    ///
    /// This is the undo-then-diverge step: anything after `len` is dropped.
    pub fn truncated_with(&self, len: usize, next: Board) -> Self {
        let mut boards: Vec<Board> = self.boards.iter().take(len).copied().collect();
        boards.push(next);
        Self { boards }
    }

    /// Label for the jump button of entry `index`.
    pub fn label(index: usize) -> String {
        if index == 0 {
            "Go to game start".to_string()
        } else {
            format!("Go to move #{}", index)
        }
    }

    /// Cell filled by the move that produced entry `index`.
    ///
    /// `None` for the starting board, or when the entry does not differ from
    /// its predecessor by exactly one newly filled cell.
    pub fn move_location(&self, index: usize) -> Option<Position> {
        let before = self.boards.get(index.checked_sub(1)?)?;
        let after = self.boards.get(index)?;
        let mut changed = Position::ALL.into_iter().filter(|&pos| {
            before.get(pos) == Square::Empty && after.get(pos) != Square::Empty
        });
        let pos = changed.next()?;
        changed.next().is_none().then_some(pos)
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
