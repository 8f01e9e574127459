use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two seats in a match. The seat order is the reporting
/// perspective: results are always expressed relative to it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    First,
    Second,
}

impl Seat {
    pub fn other(self) -> Seat {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }

    pub fn idx(self) -> usize {
        match self {
            Seat::First => 0,
            Seat::Second => 1,
        }
    }

    /// Pick a seat uniformly at random.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Seat {
        if rng.gen_bool(0.5) {
            Seat::First
        } else {
            Seat::Second
        }
    }
}

/// Full game state as encoded by the oracle.
///
/// The core never looks inside a position; it only hands it back to the
/// oracle or an agent. The one exception is [`Position::summary`], used for
/// result lines.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Position(String);

impl Position {
    /// Wrap oracle output. Surrounding whitespace is stripped; `None` if
    /// nothing is left.
    pub fn from_text(text: &str) -> Option<Position> {
        let text = text.trim();
        if text.is_empty() {
            None
        } else {
            Some(Position(text.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Last whitespace-separated field of the encoding (auxiliary counters).
    pub fn summary(&self) -> &str {
        self.0.split_whitespace().last().unwrap_or("")
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A move token produced by an agent. Always a single non-empty word.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Move(String);

impl Move {
    pub fn from_token(token: &str) -> Option<Move> {
        let token = token.trim();
        if token.is_empty() || token.chars().any(char::is_whitespace) {
            None
        } else {
            Some(Move(token.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What the oracle reports for a position.
///
/// `raw_score` is relative to the side to move in that position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameOutcome {
    pub is_terminal: bool,
    pub raw_score: i32,
}

impl GameOutcome {
    pub fn ongoing() -> Self {
        Self {
            is_terminal: false,
            raw_score: 0,
        }
    }

    pub fn terminal(raw_score: i32) -> Self {
        Self {
            is_terminal: true,
            raw_score,
        }
    }
}
