//! The (history, current move) pair and its four mutators.

use crate::{Board, History};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Application state behind the game: every snapshot plus the one on display.
///
/// The setters store whatever they are given. Keeping `history` non-empty
/// and `current_move` in range is the caller's job; use
/// [`StoreInvariants`](crate::invariants::StoreInvariants) to audit.
///
/// Each mutation bumps `revision`, so observers can tell when derived values
/// need recomputing without diffing the state.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct HistoryStore {
    history: History,
    current_move: usize,
    revision: u64,
}

impl HistoryStore {
    /// A store holding only the empty board, displayed.
    pub fn new() -> Self {
        Self {
            history: History::new(),
            current_move: 0,
            revision: 0,
        }
    }

    /// Replaces the history wholesale.
    #[instrument(skip(self, history), fields(len = history.len()))]
    pub fn set_history(&mut self, history: History) {
        self.history = history;
        self.touch();
    }

    /// Replaces the history with `f` applied to the current one.
    pub fn update_history(&mut self, f: impl FnOnce(&History) -> History) {
        let next = f(&self.history);
        self.set_history(next);
    }

    /// Replaces the displayed index.
    #[instrument(skip(self))]
    pub fn set_current_move(&mut self, current_move: usize) {
        self.current_move = current_move;
        self.touch();
    }

    /// Replaces the displayed index with `f` applied to the current one.
    pub fn update_current_move(&mut self, f: impl FnOnce(usize) -> usize) {
        let next = f(self.current_move);
        self.set_current_move(next);
    }

    /// Board at `current_move`, if that index exists.
    pub fn current_board(&self) -> Option<&Board> {
        self.history.get(self.current_move)
    }

    fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
        debug!(
            revision = self.revision,
            len = self.history.len(),
            current_move = self.current_move,
            "Store changed"
        );
    }
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self::new()
    }
}
