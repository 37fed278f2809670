//! Consecutive snapshots differ by exactly one new mark.

use super::Invariant;
use crate::{Board, HistoryStore, Player, Position, Square};

/// Invariant: the first board is empty, and every later board adds exactly
/// one mark to its predecessor, placed by the player whose turn it was.
pub struct SingleStepInvariant;

impl SingleStepInvariant {
    fn is_step(before: &Board, after: &Board, mover: Player) -> bool {
        let mut added = 0;
        for pos in Position::ALL {
            match (before.get(pos), after.get(pos)) {
                (a, b) if a == b => {}
                (Square::Empty, Square::Occupied(p)) if p == mover => added += 1,
                _ => return false,
            }
        }
        added == 1
    }
}

impl Invariant<HistoryStore> for SingleStepInvariant {
    fn holds(store: &HistoryStore) -> bool {
        let boards = store.history().boards();
        let starts_empty = boards.first().is_none_or(|b| *b == Board::new());
        starts_empty
            && boards
                .windows(2)
                .enumerate()
                .all(|(i, pair)| Self::is_step(&pair[0], &pair[1], Player::for_move(i)))
    }

    fn description() -> &'static str {
        "Each board adds exactly one mark for the player to move"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::History;

    fn store_with(boards: Vec<Board>) -> HistoryStore {
        let mut store = HistoryStore::new();
        store.set_history(History::from_boards(boards));
        store
    }

    #[test]
    fn test_alternating_single_marks_hold() {
        let x = Board::new().with(Position::Center, Square::Occupied(Player::X));
        let o = x.with(Position::TopLeft, Square::Occupied(Player::O));
        assert!(SingleStepInvariant::holds(&store_with(vec![Board::new(), x, o])));
    }

    #[test]
    fn test_wrong_marker_violates() {
        let o = Board::new().with(Position::Center, Square::Occupied(Player::O));
        assert!(!SingleStepInvariant::holds(&store_with(vec![Board::new(), o])));
    }

    #[test]
    fn test_overwrite_violates() {
        let x = Board::new().with(Position::Center, Square::Occupied(Player::X));
        let o = Board::new().with(Position::Center, Square::Occupied(Player::O));
        assert!(!SingleStepInvariant::holds(&store_with(vec![Board::new(), x, o])));
    }

    #[test]
    fn test_non_empty_start_violates() {
        let x = Board::new().with(Position::Center, Square::Occupied(Player::X));
        assert!(!SingleStepInvariant::holds(&store_with(vec![x])));
    }

    #[test]
    fn test_unchanged_board_violates() {
        assert!(!SingleStepInvariant::holds(&store_with(vec![
            Board::new(),
            Board::new()
        ])));
    }
}
