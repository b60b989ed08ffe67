//! Rules engine: turn order, win/tie transitions and scoring.
//!
//! A [`GameSession`] owns the board and both players. Front ends only
//! call its operations and render what they return; the session is
//! never mutated from outside.

use crate::invariants::{InvariantSet, SessionInvariants};
use crate::rules::{WinLine, is_tie, winning_line};
use crate::{Board, Cell, Player, Seat, types::CELL_COUNT};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Phase of the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Status {
    /// Waiting for the current player to move.
    #[default]
    AwaitingMove,
    /// The current player completed a line.
    Won,
    /// The board filled up without a line.
    Tied,
}

/// How illegal moves are reported by [`GameSession::play_round`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IllegalMovePolicy {
    /// Return [`Outcome::Rejected`] with the reason.
    #[default]
    Reject,
    /// Return [`Outcome::Ignored`], like a click on a dead cell.
    Ignore,
}

/// Why a move was not applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum MoveRejection {
    /// Index is not in 0..=8.
    #[display("Position {} out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),
    /// Cell already holds a marker.
    #[display("Position {} is already occupied", _0)]
    Occupied(usize),
    /// The round is already won or tied.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveRejection {}

/// Result of a call to [`GameSession::play_round`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Outcome {
    /// Move applied; the other player is up.
    Continue,
    /// Move completed a line.
    Winner {
        /// Snapshot of the winner, score already incremented.
        player: Player,
        /// The completed line.
        line: WinLine,
    },
    /// Move filled the board without a line.
    Tie,
    /// Move was illegal and nothing changed.
    Rejected(MoveRejection),
    /// Move was illegal and nothing changed (legacy silent policy).
    Ignored,
}

impl Outcome {
    /// Returns true if the move changed the board.
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Continue | Outcome::Winner { .. } | Outcome::Tie)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Continue => write!(f, "Continue"),
            Outcome::Winner { player, .. } => write!(f, "{} is the winner!", player.name()),
            Outcome::Tie => write!(f, "It's a tie!"),
            Outcome::Rejected(reason) => write!(f, "Rejected: {}", reason),
            Outcome::Ignored => write!(f, "Ignored"),
        }
    }
}

/// One tic-tac-toe table: board, two players and whose turn it is.
///
/// Serializes as a snapshot only. A session is built through
/// [`GameSession::new`] or [`GameSession::with_policy`] so that seat one
/// always holds X and the board always matches the turn order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSession {
    board: Board,
    players: [Player; 2],
    current: Seat,
    status: Status,
    last_line: Option<WinLine>,
    policy: IllegalMovePolicy,
}

impl GameSession {
    /// Creates a session with default names that rejects illegal moves.
    #[instrument]
    pub fn new() -> Self {
        Self::with_policy(IllegalMovePolicy::default())
    }

    /// Creates a session with the given illegal-move policy.
    #[instrument]
    pub fn with_policy(policy: IllegalMovePolicy) -> Self {
        debug!(?policy, "Creating game session");
        Self {
            board: Board::new(),
            players: [Player::for_seat(Seat::One), Player::for_seat(Seat::Two)],
            current: Seat::One,
            status: Status::AwaitingMove,
            last_line: None,
            policy,
        }
    }

    /// Plays the current player's marker at `index` (0-8).
    ///
    /// Illegal moves (out of range, occupied cell, finished round) leave
    /// the session untouched and are reported according to the policy.
    #[instrument(skip(self), fields(seat = ?self.current, status = ?self.status))]
    pub fn play_round(&mut self, index: usize) -> Outcome {
        if let Err(reason) = self.check_move(index) {
            return self.refuse(reason);
        }

        let marker = self.current_player().marker();
        if let Err(e) = self.board.place(index, marker) {
            warn!(error = %e, "Board refused a checked move");
            return self.refuse(MoveRejection::OutOfBounds(index));
        }

        let outcome = if let Some(line) = winning_line(&self.board, marker) {
            self.status = Status::Won;
            self.last_line = Some(line);
            let winner = &mut self.players[self.current.index()];
            winner.record_win();
            info!(
                winner = %winner.name(),
                score = winner.score(),
                line = ?line.indices(),
                "Round won"
            );
            Outcome::Winner {
                player: winner.clone(),
                line,
            }
        } else if self.board.is_full() {
            debug_assert!(is_tie(&self.board), "full board without a line must be a tie");
            self.status = Status::Tied;
            info!("Round tied");
            Outcome::Tie
        } else {
            self.current = self.current.other();
            debug!(next = ?self.current, "Turn passed");
            Outcome::Continue
        };

        debug_assert!(
            SessionInvariants::check_all(self).is_ok(),
            "session invariants violated after move at {index}"
        );

        outcome
    }

    fn check_move(&self, index: usize) -> Result<(), MoveRejection> {
        if self.status != Status::AwaitingMove {
            return Err(MoveRejection::GameOver);
        }
        if index >= CELL_COUNT {
            return Err(MoveRejection::OutOfBounds(index));
        }
        if !self.board.is_empty(index) {
            return Err(MoveRejection::Occupied(index));
        }
        Ok(())
    }

    fn refuse(&self, reason: MoveRejection) -> Outcome {
        match self.policy {
            IllegalMovePolicy::Reject => {
                warn!(%reason, "Move rejected");
                Outcome::Rejected(reason)
            }
            IllegalMovePolicy::Ignore => {
                debug!(%reason, "Move ignored");
                Outcome::Ignored
            }
        }
    }

    /// Starts a new round. Names and scores are kept.
    #[instrument(skip(self))]
    pub fn reset_game(&mut self) {
        self.board.reset();
        self.current = Seat::One;
        self.status = Status::AwaitingMove;
        self.last_line = None;
        info!("Round reset");
    }

    /// Zeroes both scores. The board is left alone.
    #[instrument(skip(self))]
    pub fn reset_scores(&mut self) {
        for player in &mut self.players {
            player.clear_score();
        }
        info!("Scores reset");
    }

    /// Renames the player in `seat`.
    ///
    /// The name is trimmed; a blank name restores the seat's default.
    #[instrument(skip(self))]
    pub fn rename_player(&mut self, seat: Seat, name: &str) {
        let trimmed = name.trim();
        let name = if trimmed.is_empty() {
            seat.default_name()
        } else {
            trimmed
        };
        info!(?seat, name, "Player renamed");
        self.players[seat.index()].set_name(name.to_string());
    }

    /// Player whose turn it is (or who just won).
    pub fn current_player(&self) -> &Player {
        &self.players[self.current.index()]
    }

    /// Seat whose turn it is (or who just won).
    pub fn current_seat(&self) -> Seat {
        self.current
    }

    /// Player in `seat`.
    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat.index()]
    }

    /// Rounds won by the player in `seat`.
    pub fn player_score(&self, seat: Seat) -> u32 {
        self.player(seat).score()
    }

    /// Copy of all 9 cells.
    pub fn board_snapshot(&self) -> [Cell; CELL_COUNT] {
        *self.board.cells()
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Phase of the current round.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Line completed by the last win, until the next reset.
    pub fn winning_line(&self) -> Option<WinLine> {
        self.last_line
    }

    /// How illegal moves are reported.
    pub fn policy(&self) -> IllegalMovePolicy {
        self.policy
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
