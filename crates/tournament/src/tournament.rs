//! Tournament loop: repeated games with cooperative cancellation

use game_core::{Agent, AgentClient, ArenaError, OracleClient, Position};
use rand::Rng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::match_runner::{MatchConfig, MatchRunner};
use crate::results::{Termination, TournamentReport};
use crate::score::MatchResult;

/// Shared stop flag, observed only between games.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Settings for a tournament run
#[derive(Debug, Clone)]
pub struct TournamentSettings {
    /// Number of games to play
    pub games: u32,
    pub match_config: MatchConfig,
    /// Fixed start position; the oracle's initial position otherwise
    pub start_position: Option<Position>,
    /// Print one line per completed game
    pub verbose: bool,
}

impl Default for TournamentSettings {
    fn default() -> Self {
        Self {
            games: 40,
            match_config: MatchConfig::default(),
            start_position: None,
            verbose: true,
        }
    }
}

/// Runs a sequence of independent games between two agents
pub struct Tournament {
    settings: TournamentSettings,
    runner: MatchRunner,
}

impl Tournament {
    pub fn new(settings: TournamentSettings) -> Self {
        let runner = MatchRunner::new(settings.match_config.clone());
        Self { settings, runner }
    }

    /// Play up to `games` games, one after another.
    ///
    /// The cancel token is checked before each game; a game already started
    /// always runs to completion. A collaborator failure stops the loop and
    /// discards the game in flight. Completed results are returned in every
    /// case.
    pub fn run<R: Rng + ?Sized>(
        &self,
        oracle: &mut dyn OracleClient,
        random_mover: &mut dyn AgentClient,
        agents: &mut [Agent; 2],
        rng: &mut R,
        cancel: &CancelToken,
    ) -> TournamentReport {
        let labels = [agents[0].label.clone(), agents[1].label.clone()];
        let mut results = Vec::new();

        let mut termination = Termination::Completed;
        for game_num in 0..self.settings.games {
            if cancel.is_cancelled() {
                warn!(completed = results.len(), "cancellation requested, stopping");
                termination = Termination::Cancelled;
                break;
            }

            match self.play_one(oracle, random_mover, agents, rng) {
                Ok(result) => {
                    let line = result.describe(&labels);
                    info!(
                        game = game_num + 1,
                        plies = result.plies,
                        first_mover = labels[result.first_mover.idx()].as_str(),
                        "{line}"
                    );
                    if self.settings.verbose {
                        println!("Game {}/{}: {}", game_num + 1, self.settings.games, line);
                    }
                    results.push(result);
                }
                Err(err) => {
                    error!(game = game_num + 1, error = %err, "game aborted");
                    termination = Termination::Aborted(err);
                    break;
                }
            }
        }

        TournamentReport {
            labels,
            games_planned: self.settings.games,
            results,
            termination,
        }
    }

    fn play_one<R: Rng + ?Sized>(
        &self,
        oracle: &mut dyn OracleClient,
        random_mover: &mut dyn AgentClient,
        agents: &mut [Agent; 2],
        rng: &mut R,
    ) -> Result<MatchResult, ArenaError> {
        let start = match &self.settings.start_position {
            Some(pos) => pos.clone(),
            None => oracle.initial_position()?,
        };
        let start = self.runner.randomize_opening(oracle, random_mover, start)?;
        info!(start = %start, "starting game");

        let game = self.runner.play_game(oracle, agents, start, rng)?;
        Ok(MatchResult::from_game(game))
    }
}

#[cfg(test)]
#[path = "tournament_tests.rs"]
mod tournament_tests;
