//! History is never empty.

use super::Invariant;
use crate::HistoryStore;

/// Invariant: the history holds at least the starting board.
pub struct NonEmptyHistoryInvariant;

impl Invariant<HistoryStore> for NonEmptyHistoryInvariant {
    fn holds(store: &HistoryStore) -> bool {
        !store.history().is_empty()
    }

    fn description() -> &'static str {
        "History holds at least one board"
    }
}
