//! Tie detection logic for tic-tac-toe.

use super::win::winning_line;
use crate::{Board, Marker};
use tracing::instrument;

/// A tie is a full board on which neither marker holds a line.
#[instrument(skip(board))]
pub fn is_tie(board: &Board) -> bool {
    board.is_full()
        && winning_line(board, Marker::X).is_none()
        && winning_line(board, Marker::O).is_none()
}
