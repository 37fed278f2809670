//! Command-line interface for timetravel_tictactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe with move history and time travel
#[derive(Parser, Debug)]
#[command(name = "timetravel_tictactoe")]
#[command(about = "Tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file (timetravel.toml is used when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        /// List history newest first
        #[arg(long)]
        descending: bool,

        /// Hide the (row, col) of each move in the history list
        #[arg(long)]
        hide_locations: bool,
    },

    /// Run a move script without the UI and print the result
    ///
    /// Tokens are separated by commas or whitespace: `0`-`8` clicks a cell,
    /// `@N` jumps to history entry N.
    Replay {
        /// The script, e.g. "4,0,@1,8"
        script: String,

        /// Print the final view as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// The command to run, `play` with defaults when none was given.
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Play {
            descending: false,
            hide_locations: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_play() {
        let cli = Cli::try_parse_from(["timetravel_tictactoe"]).unwrap();
        assert!(matches!(cli.command(), Command::Play { descending: false, .. }));
        assert_eq!(cli.config, None);
    }

    #[test]
    fn test_replay_args() {
        let cli = Cli::try_parse_from([
            "timetravel_tictactoe",
            "replay",
            "4,0,@1",
            "--json",
            "--config",
            "other.toml",
        ])
        .unwrap();
        assert_eq!(
            cli.command(),
            Command::Replay {
                script: "4,0,@1".to_string(),
                json: true
            }
        );
        assert_eq!(cli.config, Some(PathBuf::from("other.toml")));
    }
}
