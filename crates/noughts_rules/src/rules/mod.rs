//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart
//! from board storage so the engine and front ends can share them.

pub mod tie;
pub mod win;

pub use tie::is_tie;
pub use win::{WIN_LINES, WinLine, winning_line};
