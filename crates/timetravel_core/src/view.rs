//! Values derived from the store for rendering.

use crate::rules::{Status, filled_count, status, winner, winning_line};
use crate::{Board, History, HistoryStore, Player, Position};
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One history button.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, new)]
pub struct HistoryEntry {
    /// History index this button jumps to.
    index: usize,
    /// Button text.
    label: String,
    /// Cell filled by the move that produced this entry.
    location: Option<Position>,
    /// Whether this is the displayed entry.
    is_current: bool,
}

/// Everything the UI shows, recomputed from a [`HistoryStore`].
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameView {
    /// Store revision this view was derived from.
    revision: u64,
    /// Displayed snapshot index.
    current_move: usize,
    /// Displayed snapshot.
    board: Board,
    /// Player to move on the displayed snapshot.
    next_player: Player,
    /// Winner on the displayed snapshot.
    winner: Option<Player>,
    /// Cells of the winning line, for highlighting.
    winning_line: Option<[Position; 3]>,
    /// Status line.
    status: Status,
    /// One entry per history snapshot, oldest first.
    entries: Vec<HistoryEntry>,
}

impl GameView {
    /// Derives the view of `store`.
    #[instrument(skip(store), fields(revision = *store.revision()))]
    pub fn derive(store: &HistoryStore) -> Self {
        let current_move = *store.current_move();
        let board = store.current_board().copied().unwrap_or_default();
        let next_player = Player::for_move(current_move);
        let winner = winner(&board);
        let history = store.history();
        let entries = (0..history.len())
            .map(|index| {
                HistoryEntry::new(
                    index,
                    History::label(index),
                    history.move_location(index),
                    index == current_move,
                )
            })
            .collect();

        Self {
            revision: *store.revision(),
            current_move,
            board,
            next_player,
            winner,
            winning_line: winning_line(&board),
            status: status(winner, filled_count(&board), next_player),
            entries,
        }
    }

    /// Whether `pos` is part of the winning line.
    pub fn is_winning_cell(&self, pos: Position) -> bool {
        self.winning_line.is_some_and(|line| line.contains(&pos))
    }
}
