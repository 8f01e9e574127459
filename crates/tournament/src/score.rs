//! Conversion of oracle scores into seat-relative results

use game_core::{Position, Seat};
use serde::{Deserialize, Serialize};

use crate::match_runner::PlayedGame;

/// Result of a single game from the seat order's perspective
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Win { seat: Seat, score: u32 },
    Draw,
}

/// Normalize a raw oracle score.
///
/// `raw_score` is relative to `to_move`, the seat whose turn it was when the
/// oracle reported terminal. A negative score means that seat lost, so the
/// win goes to the other seat with the magnitude kept.
pub fn normalize_score(raw_score: i32, to_move: Seat) -> Verdict {
    let (seat, score) = if raw_score < 0 {
        (to_move.other(), raw_score.unsigned_abs())
    } else {
        (to_move, raw_score.unsigned_abs())
    };

    if score == 0 {
        Verdict::Draw
    } else {
        Verdict::Win { seat, score }
    }
}

/// A completed, scored game. Read-only once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Winning seat, `None` for a draw
    pub winner: Option<Seat>,
    /// Always zero for draws
    pub score: u32,
    pub first_mover: Seat,
    pub plies: u32,
    pub final_position: Position,
}

impl MatchResult {
    pub fn from_game(game: PlayedGame) -> Self {
        let (winner, score) = match normalize_score(game.raw_score, game.to_move) {
            Verdict::Win { seat, score } => (Some(seat), score),
            Verdict::Draw => (None, 0),
        };
        Self {
            winner,
            score,
            first_mover: game.first_mover,
            plies: game.plies,
            final_position: game.final_position,
        }
    }

    pub fn is_draw(&self) -> bool {
        self.winner.is_none()
    }

    /// Human-readable description, e.g. `winner ./minicou score=3 tiles=2458abdf`.
    pub fn describe(&self, labels: &[String; 2]) -> String {
        match self.winner {
            Some(seat) => format!(
                "winner {} score={} tiles={}",
                labels[seat.idx()],
                self.score,
                self.final_position.summary()
            ),
            None => "draw".to_string(),
        }
    }
}

#[cfg(test)]
#[path = "score_tests.rs"]
mod score_tests;
