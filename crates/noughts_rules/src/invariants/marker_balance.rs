//! Marker balance: X moves first, so X is never behind and never two ahead.

use super::Invariant;
use crate::{Board, GameSession, Marker};

/// Invariant: `count(X) - count(O)` is 0 or 1.
pub struct MarkerBalanceInvariant;

impl MarkerBalanceInvariant {
    /// Checks the balance on a bare board.
    pub fn holds_for(board: &Board) -> bool {
        let xs = board.count(Marker::X);
        let os = board.count(Marker::O);
        xs == os || xs == os + 1
    }
}

impl Invariant<GameSession> for MarkerBalanceInvariant {
    fn holds(session: &GameSession) -> bool {
        Self::holds_for(session.board())
    }

    fn description() -> &'static str {
        "X and O counts differ by at most one, X never behind"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_balanced() {
        assert!(MarkerBalanceInvariant::holds_for(&Board::new()));
    }

    #[test]
    fn test_o_ahead_violates() {
        let mut board = Board::new();
        board.place(0, Marker::O).unwrap();
        assert!(!MarkerBalanceInvariant::holds_for(&board));
    }

    #[test]
    fn test_x_two_ahead_violates() {
        let mut board = Board::new();
        board.place(0, Marker::X).unwrap();
        board.place(1, Marker::X).unwrap();
        assert!(!MarkerBalanceInvariant::holds_for(&board));
    }
}
