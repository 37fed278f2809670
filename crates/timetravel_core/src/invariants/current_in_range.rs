//! Displayed index points at an existing snapshot.

use super::Invariant;
use crate::HistoryStore;

/// Invariant: `0 <= current_move < history.len()`.
pub struct CurrentMoveInRangeInvariant;

impl Invariant<HistoryStore> for CurrentMoveInRangeInvariant {
    fn holds(store: &HistoryStore) -> bool {
        *store.current_move() < store.history().len()
    }

    fn description() -> &'static str {
        "Current move indexes an existing board"
    }
}
