//! Command-line interface for noughts.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Noughts - two-player tic-tac-toe
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the game config (TOML). Defaults apply if it does not exist.
    #[arg(short, long, global = true, default_value = "noughts.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// File the TUI writes its log to
        #[arg(long, default_value = "noughts_tui.log")]
        log_file: PathBuf,
    },

    /// Play a list of moves without a UI and print the result
    Moves {
        /// Board indices (0-8) or labels such as "center", comma or space separated
        #[arg(required = true, num_args = 1.., value_delimiter = ',')]
        moves: Vec<String>,

        /// Print the outcomes and final session as JSON
        #[arg(long)]
        json: bool,
    },
}
