//! Game orchestration: playing moves and travelling through history.

use crate::click::board_after_click;
use crate::invariants::{InvariantSet, StoreInvariants};
use crate::{Action, ActionOutcome, Board, ClickOutcome, GameView, HistoryStore, Player, Position};
use tracing::{debug, info, instrument, warn};

/// Tic-tac-toe game with a time-travel move history.
///
/// Owns the [`HistoryStore`]; all mutation goes through [`Game::play`],
/// [`Game::jump`] or [`Game::dispatch`].
///
/// Unlike [`HistoryStore::set_current_move`], which stores any index it is
/// given, [`Game::jump`] refuses an index past the end of the history.
#[derive(Debug, Clone, Default)]
pub struct Game {
    store: HistoryStore,
}

impl Game {
    /// Creates a new game showing the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an existing store.
    pub fn from_store(store: HistoryStore) -> Self {
        Self { store }
    }

    /// Read access to the underlying store.
    pub fn store(&self) -> &HistoryStore {
        &self.store
    }

    /// Index of the displayed snapshot.
    pub fn current_move(&self) -> usize {
        *self.store.current_move()
    }

    /// Displayed snapshot.
    ///
    /// Falls back to the empty board if the store was left pointing past the
    /// end of its history.
    pub fn current_board(&self) -> Board {
        self.store.current_board().copied().unwrap_or_default()
    }

    /// Player who moves next on the displayed snapshot.
    pub fn next_player(&self) -> Player {
        Player::for_move(self.current_move())
    }

    /// Values derived from the current state, for rendering.
    pub fn view(&self) -> GameView {
        GameView::derive(&self.store)
    }

    /// Records `next_board` as the move after the displayed snapshot.
    ///
    /// Any snapshots after the displayed one are discarded first, then
    /// `next_board` is appended and displayed.
    #[instrument(skip(self, next_board), fields(current_move = self.current_move()))]
    pub fn play(&mut self, next_board: Board) {
        let keep = self.current_move().saturating_add(1);
        let dropped = self.store.history().len().saturating_sub(keep);
        if dropped > 0 {
            info!(dropped, "Discarding future moves");
        }
        self.store.update_history(|h| h.truncated_with(keep, next_board));
        let last = self.store.history().len() - 1;
        self.store.set_current_move(last);
        self.audit();
    }

    /// Displays snapshot `index` without touching the history.
    ///
    /// Returns false, leaving everything unchanged, when `index` is past the
    /// end of the history. This bounds check is the one difference from
    /// setting the store's current move directly.
    #[instrument(skip(self))]
    pub fn jump(&mut self, index: usize) -> bool {
        if index >= self.store.history().len() {
            warn!(index, len = self.store.history().len(), "Ignoring jump outside history");
            return false;
        }
        self.store.set_current_move(index);
        self.audit();
        true
    }

    /// Handles a click on `pos` of the displayed board.
    ///
    /// Clicks on taken squares or on a won board are ignored.
    #[instrument(skip(self))]
    pub fn click(&mut self, pos: Position) -> ClickOutcome {
        let player = self.next_player();
        match board_after_click(&self.current_board(), pos, player) {
            Ok(next) => {
                self.play(next);
                debug!(%player, %pos, "Move played");
                ClickOutcome::Played(player, pos)
            }
            Err(rejected) => rejected,
        }
    }

    /// Applies an [`Action`] from the UI.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, action: Action) -> ActionOutcome {
        match action {
            Action::Click(pos) => ActionOutcome::Clicked(self.click(pos)),
            Action::Jump(index) if self.jump(index) => ActionOutcome::Jumped(index),
            Action::Jump(index) => ActionOutcome::JumpIgnored(index),
        }
    }

    fn audit(&self) {
        if let Err(violations) = StoreInvariants::check_all(&self.store) {
            for violation in violations {
                warn!(%violation, "Store invariant violated");
            }
        }
    }
}
