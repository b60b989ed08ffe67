//! Win detection logic for tic-tac-toe.

use crate::{Board, Marker};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Three board indices forming a row, column or diagonal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinLine([usize; 3]);

impl WinLine {
    /// The three indices of this line.
    pub fn indices(self) -> [usize; 3] {
        self.0
    }

    /// Returns true if `index` lies on this line.
    pub fn contains(self, index: usize) -> bool {
        self.0.contains(&index)
    }
}

/// Every winning line, in detection order.
pub const WIN_LINES: [WinLine; 8] = [
    // Rows
    WinLine([0, 1, 2]),
    WinLine([3, 4, 5]),
    WinLine([6, 7, 8]),
    // Columns
    WinLine([0, 3, 6]),
    WinLine([1, 4, 7]),
    WinLine([2, 5, 8]),
    // Diagonals
    WinLine([0, 4, 8]),
    WinLine([2, 4, 6]),
];

/// Returns the first line fully held by `marker`, if any.
#[instrument(skip(board))]
pub fn winning_line(board: &Board, marker: Marker) -> Option<WinLine> {
    let held = board.positions_of(marker);
    if held.len() < 3 {
        return None;
    }

    WIN_LINES
        .iter()
        .copied()
        .find(|line| line.indices().iter().all(|&i| held.contains(i)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(marker: Marker, indices: &[usize]) -> Board {
        let mut board = Board::new();
        for &i in indices {
            board.place(i, marker).unwrap();
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(winning_line(&board, Marker::X), None);
        assert_eq!(winning_line(&board, Marker::O), None);
    }

    #[test]
    fn test_every_line_wins() {
        for line in WIN_LINES {
            let board = board_with(Marker::O, &line.indices());
            assert_eq!(winning_line(&board, Marker::O), Some(line));
            assert_eq!(winning_line(&board, Marker::X), None);
        }
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(Marker::X, &[0, 1, 5]);
        assert_eq!(winning_line(&board, Marker::X), None);
    }

    #[test]
    fn test_first_line_reported_when_two_complete() {
        // Row 0 and column 0 both complete.
        let board = board_with(Marker::X, &[0, 1, 2, 3, 6]);
        assert_eq!(winning_line(&board, Marker::X), Some(WIN_LINES[0]));
    }
}
