//! Noughts - two-player tic-tac-toe
//!
//! The rules live in the `noughts_rules` crate; this crate is the shell
//! around them.
//!
//! # Architecture
//!
//! - **Config**: player names and illegal-move policy from TOML
//! - **Headless**: play a move list and report outcomes
//! - **TUI**: interactive terminal front end
//!
//! # Example
//!
//! ```
//! use noughts::{GameConfig, headless};
//!
//! let mut session = GameConfig::default().build_session();
//! let report = headless::run(&mut session, &[0, 3, 1, 4, 2]);
//! assert_eq!(report.players[0].score(), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
pub mod headless;
pub mod tui;

pub use cli::{Cli, Command};
pub use config::{ConfigError, GameConfig};

pub use noughts_rules::{
    Board, Cell, GameSession, IllegalMovePolicy, Marker, MoveRejection, Outcome, Player,
    Position, Seat, Status, WIN_LINES, WinLine,
};
