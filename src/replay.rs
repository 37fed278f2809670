//! Headless script runner.
//!
//! A script is a list of tokens separated by commas or whitespace. A digit
//! `0`-`8` clicks that cell; `@N` jumps to history entry `N`. Ignored clicks
//! and jumps are reported but do not stop the run.

use derive_more::{Display, Error};
use std::fmt::Write as _;
use timetravel_core::{Action, ActionOutcome, Game, GameView, Position};
use tracing::{debug, instrument};

/// Problem parsing a script.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ScriptError {
    /// A click token was not a cell index 0-8.
    #[display("Token {token:?} at {at}: cell must be 0-8")]
    BadCell {
        /// The offending token.
        token: String,
        /// Zero-based token position.
        at: usize,
    },
    /// A jump token was not `@` followed by a number.
    #[display("Token {token:?} at {at}: jump must look like @N")]
    BadJump {
        /// The offending token.
        token: String,
        /// Zero-based token position.
        at: usize,
    },
}

/// Parses `script` into actions.
#[instrument]
pub fn parse_script(script: &str) -> Result<Vec<Action>, ScriptError> {
    script
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .enumerate()
        .map(|(at, token)| parse_token(token, at))
        .collect()
}

fn parse_token(token: &str, at: usize) -> Result<Action, ScriptError> {
    if let Some(index) = token.strip_prefix('@') {
        return index.parse().map(Action::Jump).map_err(|_| ScriptError::BadJump {
            token: token.to_string(),
            at,
        });
    }
    token
        .parse::<usize>()
        .ok()
        .and_then(Position::from_index)
        .map(Action::Click)
        .ok_or_else(|| ScriptError::BadCell {
            token: token.to_string(),
            at,
        })
}

/// Outcome of running a script.
#[derive(Debug, Clone)]
pub struct Replay {
    /// Each action with what it did.
    pub steps: Vec<(Action, ActionOutcome)>,
    /// The game after the last action.
    pub game: Game,
}

impl Replay {
    /// View of the final state.
    pub fn view(&self) -> GameView {
        self.game.view()
    }

    /// Plain-text rendering: board, status, then one line per history entry.
    pub fn render_text(&self) -> String {
        let view = self.view();
        let mut out = String::new();
        for (action, outcome) in &self.steps {
            if !outcome.changed_state() {
                let _ = writeln!(out, "ignored {}: {}", action, outcome);
            }
        }
        let _ = writeln!(out, "{}", view.board().display());
        let _ = writeln!(out, "{}", view.status());
        for entry in view.entries() {
            let marker = if *entry.is_current() { ">" } else { " " };
            let _ = writeln!(out, "{} {}", marker, entry.label());
        }
        out
    }
}

/// Plays `script` on a fresh game.
#[instrument]
pub fn run_script(script: &str) -> Result<Replay, ScriptError> {
    let mut game = Game::new();
    let steps = parse_script(script)?
        .into_iter()
        .map(|action| {
            let outcome = game.dispatch(action);
            debug!(%action, %outcome, "Replayed action");
            (action, outcome)
        })
        .collect();
    Ok(Replay { steps, game })
}
