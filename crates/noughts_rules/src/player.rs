//! The two players of a session.

use crate::Marker;
use serde::{Deserialize, Serialize};

/// Fixed seat of a player. Seat one always plays X.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    /// First seat, marker X.
    One,
    /// Second seat, marker O.
    Two,
}

impl Seat {
    /// Both seats, in turn order.
    pub const BOTH: [Seat; 2] = [Seat::One, Seat::Two];

    /// Seat for a player index (0 or 1).
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Seat::One),
            1 => Some(Seat::Two),
            _ => None,
        }
    }

    /// Player index (0 or 1).
    pub fn index(self) -> usize {
        match self {
            Seat::One => 0,
            Seat::Two => 1,
        }
    }

    /// The seat that moves after this one.
    pub fn other(self) -> Self {
        match self {
            Seat::One => Seat::Two,
            Seat::Two => Seat::One,
        }
    }

    /// Marker owned by this seat.
    pub fn marker(self) -> Marker {
        match self {
            Seat::One => Marker::X,
            Seat::Two => Marker::O,
        }
    }

    /// Name a player in this seat gets when none is given.
    pub fn default_name(self) -> &'static str {
        match self {
            Seat::One => "Player One",
            Seat::Two => "Player Two",
        }
    }
}

/// A player: mutable name and score, fixed marker.
///
/// Only [`Player::for_seat`] builds one, so the marker always follows the seat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Player {
    name: String,
    marker: Marker,
    score: u32,
}

impl Player {
    /// Creates the default player for `seat` with a zero score.
    pub fn for_seat(seat: Seat) -> Self {
        Self {
            name: seat.default_name().to_string(),
            marker: seat.marker(),
            score: 0,
        }
    }

    /// Player's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Marker this player places.
    pub fn marker(&self) -> Marker {
        self.marker
    }

    /// Rounds won.
    pub fn score(&self) -> u32 {
        self.score
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }

    pub(crate) fn record_win(&mut self) {
        self.score += 1;
    }

    pub(crate) fn clear_score(&mut self) {
        self.score = 0;
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.marker)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seat_index_round_trip() {
        for seat in Seat::BOTH {
            assert_eq!(Seat::from_index(seat.index()), Some(seat));
        }
        assert_eq!(Seat::from_index(2), None);
    }

    #[test]
    fn test_default_players() {
        let one = Player::for_seat(Seat::One);
        let two = Player::for_seat(Seat::Two);
        assert_eq!(one.name(), "Player One");
        assert_eq!(one.marker(), Marker::X);
        assert_eq!(two.name(), "Player Two");
        assert_eq!(two.marker(), Marker::O);
        assert_eq!(one.score() + two.score(), 0);
    }
}
