//! Headless play: run a move list through a session and report.

use anyhow::{Result, bail};
use noughts_rules::{Board, GameSession, Outcome, Player, Position, Seat, Status};
use serde::Serialize;
use tracing::{info, instrument};

/// One applied (or refused) move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveRecord {
    /// Board index the move targeted.
    pub index: usize,
    /// What the engine returned.
    pub outcome: Outcome,
}

/// Everything a headless run produced.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// Per-move results, in play order.
    pub moves: Vec<MoveRecord>,
    /// Final board.
    pub board: Board,
    /// Final status.
    pub status: Status,
    /// Player to move, or the winner once the round is won.
    pub current_player: Player,
    /// Both players, seat one first.
    pub players: Vec<Player>,
}

/// Parses move tokens: board indices ("0".."8") or position labels.
///
/// Tokens may also be separated by whitespace within one argument.
/// Numbers outside 0-8 are passed through so the engine can refuse them.
#[instrument]
pub fn parse_moves(tokens: &[String]) -> Result<Vec<usize>> {
    let mut indices = Vec::new();
    for token in tokens.iter().flat_map(|t| t.split_whitespace()) {
        if let Some(pos) = Position::from_label_or_number(token) {
            indices.push(pos.to_index());
        } else if let Ok(number) = token.parse::<usize>() {
            indices.push(number);
        } else {
            bail!("Unrecognised move '{}': expected 0-8 or a position label", token);
        }
    }
    Ok(indices)
}

/// Plays `indices` in order on `session`.
#[instrument(skip(session))]
pub fn run(session: &mut GameSession, indices: &[usize]) -> RunReport {
    let moves = indices
        .iter()
        .map(|&index| MoveRecord {
            index,
            outcome: session.play_round(index),
        })
        .collect();

    info!(status = ?session.status(), "Headless run finished");

    RunReport {
        moves,
        board: session.board().clone(),
        status: session.status(),
        current_player: session.current_player().clone(),
        players: Seat::BOTH
            .iter()
            .map(|&seat| session.player(seat).clone())
            .collect(),
    }
}

impl RunReport {
    /// Renders the report as plain text.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for record in &self.moves {
            out.push_str(&format!("{} -> {}\n", record.index, record.outcome));
        }
        out.push('\n');
        out.push_str(&self.board.display());
        out.push_str("\n\n");
        match self.status {
            Status::AwaitingMove => out.push_str(&format!("{} to move\n", self.current_player)),
            Status::Won => out.push_str(&format!("{} is the winner!\n", self.current_player.name())),
            Status::Tied => out.push_str("It's a tie!\n"),
        }
        for player in &self.players {
            out.push_str(&format!("{}: {}\n", player.name(), player.score()));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_numbers_and_labels() {
        let parsed = parse_moves(&tokens(&["0", "center", "8 top-right"])).unwrap();
        assert_eq!(parsed, vec![0, 4, 8, 2]);
    }

    #[test]
    fn test_parse_keeps_out_of_range_numbers() {
        assert_eq!(parse_moves(&tokens(&["12"])).unwrap(), vec![12]);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_moves(&tokens(&["middle"])).is_err());
    }

    #[test]
    fn test_text_report_for_win() {
        let mut session = GameSession::new();
        let report = run(&mut session, &[0, 3, 1, 4, 2]);
        let text = report.to_text();
        assert!(text.contains("Player One is the winner!"));
        assert!(text.contains("Player One: 1"));
        assert!(text.contains("Player Two: 0"));
        assert!(text.starts_with("0 -> Continue\n"));
    }
}
