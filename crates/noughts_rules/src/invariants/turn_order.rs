//! Turn order: the current seat agrees with the markers on the board.

use super::Invariant;
use crate::{GameSession, Marker, Seat, Status};

/// Invariant: the current seat matches the move count.
///
/// While awaiting a move, seat one is up exactly when both markers have
/// been played equally often. Once a round is won the turn stays with
/// the winner, who made the last move.
pub struct TurnOrderInvariant;

impl Invariant<GameSession> for TurnOrderInvariant {
    fn holds(session: &GameSession) -> bool {
        let xs = session.board().count(Marker::X);
        let os = session.board().count(Marker::O);
        let last_mover = if xs > os { Seat::One } else { Seat::Two };

        match session.status() {
            Status::AwaitingMove => (session.current_seat() == Seat::One) == (xs == os),
            Status::Won => xs + os > 0 && session.current_seat() == last_mover,
            Status::Tied => session.board().is_full(),
        }
    }

    fn description() -> &'static str {
        "Current seat matches the moves on the board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_holds_while_playing() {
        let mut session = GameSession::new();
        assert!(TurnOrderInvariant::holds(&session));
        session.play_round(4);
        assert!(TurnOrderInvariant::holds(&session));
    }

    #[test]
    fn test_holds_after_o_wins() {
        let mut session = GameSession::new();
        for index in [0, 3, 1, 4, 8, 5] {
            session.play_round(index);
        }
        assert_eq!(session.status(), Status::Won);
        assert_eq!(session.current_seat(), Seat::Two);
        assert!(TurnOrderInvariant::holds(&session));
    }
}
