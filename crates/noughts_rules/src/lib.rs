//! Tic-tac-toe rules engine.
//!
//! Pure game logic with no I/O: a 3x3 [`Board`], two [`Player`]s in fixed
//! [`Seat`]s, and a [`GameSession`] that enforces turn order, detects wins
//! and ties, and keeps score.
//!
//! ```
//! use noughts_rules::{GameSession, Outcome, Seat};
//!
//! let mut session = GameSession::new();
//! for index in [0, 3, 1, 4] {
//!     assert_eq!(session.play_round(index), Outcome::Continue);
//! }
//! assert!(matches!(session.play_round(2), Outcome::Winner { .. }));
//! assert_eq!(session.player_score(Seat::One), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
pub mod invariants;
mod player;
mod position;
pub mod rules;
mod types;

pub use engine::{GameSession, IllegalMovePolicy, MoveRejection, Outcome, Status};
pub use player::{Player, Seat};
pub use position::Position;
pub use rules::{WIN_LINES, WinLine};
pub use types::{Board, BoardError, CELL_COUNT, Cell, Marker, PositionSet};
