//! User intents the game understands.
//!
//! The UI translates raw input into an [`Action`] and hands it to
//! [`Game::dispatch`](crate::Game::dispatch); it never touches the store.

use crate::{ClickOutcome, Position};
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Something the player asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Action {
    /// Click a cell of the displayed board.
    #[display("click {_0}")]
    Click(Position),
    /// Click the history button for this index.
    #[display("jump to {_0}")]
    Jump(usize),
}

/// What dispatching an [`Action`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum ActionOutcome {
    /// Result of a click.
    #[display("{_0}")]
    Clicked(ClickOutcome),
    /// The view moved to this history index.
    #[display("Viewing {}", viewing(*_0))]
    Jumped(usize),
    /// The index was past the end of the history; nothing changed.
    #[display("No history entry #{_0}")]
    JumpIgnored(usize),
}

fn viewing(index: usize) -> String {
    match index {
        0 => "game start".to_string(),
        n => format!("move #{n}"),
    }
}

impl ActionOutcome {
    /// True when the store was modified.
    pub fn changed_state(self) -> bool {
        matches!(
            self,
            ActionOutcome::Clicked(ClickOutcome::Played(..)) | ActionOutcome::Jumped(_)
        )
    }
}
