//! Match runner for playing single games between two agents

use game_core::{Agent, AgentClient, ArenaError, OracleClient, Position, Seat};
use rand::Rng;
use tracing::debug;

/// Configuration for a single game
#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Search depth passed to the competing agents
    pub depth: u8,
    /// Random plies played before competitive play starts
    pub opening_plies: u32,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            depth: 1,
            opening_plies: 0,
        }
    }
}

/// A game played to a terminal position, before score normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayedGame {
    /// Seat asked for the first competitive move
    pub first_mover: Seat,
    /// Seat whose turn it was when the oracle reported terminal
    pub to_move: Seat,
    /// Competitive plies applied (opening plies excluded)
    pub plies: u32,
    pub final_position: Position,
    /// Oracle score at the terminating query, relative to `to_move`
    pub raw_score: i32,
}

/// Plays games between two agents, refereed by an oracle
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    /// Perturb `start` by the configured number of random plies.
    ///
    /// With zero opening plies the start position is returned untouched.
    pub fn randomize_opening(
        &self,
        oracle: &mut dyn OracleClient,
        random_mover: &mut dyn AgentClient,
        start: Position,
    ) -> Result<Position, ArenaError> {
        let mut pos = start;
        for ply in 0..self.config.opening_plies {
            let mv = random_mover.choose_move(&pos, None)?;
            debug!(ply, %mv, "opening move");
            pos = oracle.apply(&pos, &mv)?;
        }
        Ok(pos)
    }

    /// Play one game from `start` until the oracle reports a terminal position.
    ///
    /// The first mover is drawn from `rng`; after that the seats strictly
    /// alternate, one ply each. There is no move limit.
    pub fn play_game<R: Rng + ?Sized>(
        &self,
        oracle: &mut dyn OracleClient,
        agents: &mut [Agent; 2],
        start: Position,
        rng: &mut R,
    ) -> Result<PlayedGame, ArenaError> {
        let first_mover = Seat::random(rng);
        let mut to_move = first_mover;
        let mut pos = start;
        let mut plies = 0u32;

        loop {
            let outcome = oracle.evaluate(&pos)?;
            if outcome.is_terminal {
                return Ok(PlayedGame {
                    first_mover,
                    to_move,
                    plies,
                    final_position: pos,
                    raw_score: outcome.raw_score,
                });
            }

            let agent = &mut agents[to_move.idx()];
            let mv = agent.client.choose_move(&pos, Some(self.config.depth))?;
            debug!(ply = plies, agent = %agent.label, %mv, "move");

            pos = oracle.apply(&pos, &mv)?;
            to_move = to_move.other();
            plies += 1;
        }
    }
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
