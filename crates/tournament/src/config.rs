//! Tournament configuration
//!
//! Settings come from an optional TOML file. Command-line flags take
//! priority over the file, which takes priority over built-in defaults.

use anyhow::{anyhow, bail, Context, Result};
use clap::Parser;
use game_core::{Agent, Position};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::match_runner::MatchConfig;
use crate::process::{ProcessAgent, ProcessOracle};
use crate::tournament::TournamentSettings;

/// An external program and its fixed leading arguments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandConfig {
    pub program: String,
    #[serde(default)]
    pub args: Vec<String>,
}

impl CommandConfig {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }
}

/// One seat: reporting label plus the program that plays it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Defaults to the program path
    #[serde(default)]
    pub label: Option<String>,
    #[serde(flatten)]
    pub command: CommandConfig,
}

impl AgentConfig {
    pub fn label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.command.program)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TournamentConfig {
    /// Number of games to play
    pub games: u32,
    /// Search depth passed to agents
    pub depth: u8,
    /// Random plies before competitive play
    pub opening_plies: u32,
    /// Fixed start position (oracle's initial position otherwise)
    pub start_position: Option<String>,
    /// RNG seed for first-mover selection
    pub seed: Option<u64>,
    pub oracle: CommandConfig,
    pub random_mover: CommandConfig,
    pub agents: Vec<AgentConfig>,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            games: 40,
            depth: 1,
            opening_plies: 0,
            start_position: None,
            seed: None,
            oracle: CommandConfig::new("./target/release/game-info"),
            random_mover: CommandConfig::new("./random-ia"),
            agents: Vec::new(),
        }
    }
}

impl TournamentConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        toml::from_str(&contents).with_context(|| format!("failed to parse {}", path.display()))
    }

    pub fn validate(&self) -> Result<()> {
        if self.agents.len() != 2 {
            bail!("exactly two agents are required, got {}", self.agents.len());
        }
        for (seat, agent) in self.agents.iter().enumerate() {
            if agent.command.program.trim().is_empty() {
                bail!("agent {} has an empty program", seat + 1);
            }
            if agent.label().trim().is_empty() {
                bail!("agent {} has an empty label", seat + 1);
            }
        }
        if self.oracle.program.trim().is_empty() {
            bail!("oracle program cannot be empty");
        }
        if self.opening_plies > 0 && self.random_mover.program.trim().is_empty() {
            bail!("random mover program cannot be empty when opening plies are requested");
        }
        if let Some(start) = &self.start_position {
            if start.trim().is_empty() {
                bail!("start position cannot be blank");
            }
        }

        if self.agents[0].label() == self.agents[1].label() {
            warn!(
                label = self.agents[0].label(),
                "both seats share a label; their wins are tallied together"
            );
        }
        Ok(())
    }

    pub fn settings(&self, verbose: bool) -> Result<TournamentSettings> {
        let start_position = match &self.start_position {
            Some(text) => Some(
                Position::from_text(text).ok_or_else(|| anyhow!("start position cannot be blank"))?,
            ),
            None => None,
        };
        Ok(TournamentSettings {
            games: self.games,
            match_config: MatchConfig {
                depth: self.depth,
                opening_plies: self.opening_plies,
            },
            start_position,
            verbose,
        })
    }

    pub fn oracle(&self) -> ProcessOracle {
        ProcessOracle::new(&self.oracle.program, self.oracle.args.clone())
    }

    pub fn random_mover(&self) -> ProcessAgent {
        ProcessAgent::new(
            "random-mover",
            &self.random_mover.program,
            self.random_mover.args.clone(),
        )
    }

    pub fn agents(&self) -> Result<[Agent; 2]> {
        let agents: Vec<Agent> = self
            .agents
            .iter()
            .map(|a| {
                let client = ProcessAgent::new(a.label(), &a.command.program, a.command.args.clone());
                Agent::new(a.label(), Box::new(client))
            })
            .collect();
        agents
            .try_into()
            .map_err(|v: Vec<Agent>| anyhow!("exactly two agents are required, got {}", v.len()))
    }
}

#[derive(Parser, Debug, Clone)]
#[command(name = "tournament")]
#[command(about = "Play repeated games between two agent programs, refereed by an oracle program")]
#[command(
    long_about = "Play repeated games between two agent programs, refereed by an oracle program.

Each game starts from the oracle's initial position (or --start-position),
optionally perturbed by random opening plies, with the first mover chosen at
random. Ctrl-C stops after the game in progress and prints the tally."
)]
pub struct Cli {
    /// Agent programs for seat 1 and seat 2
    pub agents: Vec<String>,

    /// TOML configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Label for an agent, in seat order (repeatable)
    #[arg(long = "label")]
    pub labels: Vec<String>,

    /// Number of games to play
    #[arg(short = 'n', long)]
    pub games: Option<u32>,

    /// Search depth passed to agents
    #[arg(short, long)]
    pub depth: Option<u8>,

    /// Random plies played before each game
    #[arg(long)]
    pub opening_plies: Option<u32>,

    /// Fixed start position instead of the oracle's initial position
    #[arg(long)]
    pub start_position: Option<String>,

    /// RNG seed for first-mover selection
    #[arg(long)]
    pub seed: Option<u64>,

    /// Oracle program
    #[arg(long)]
    pub oracle: Option<String>,

    /// Program producing uniformly random moves for openings
    #[arg(long)]
    pub random_mover: Option<String>,

    /// Log level (trace, debug, info, warn, error); RUST_LOG takes priority
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Print the final report as JSON instead of text
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Build the effective configuration: file (or defaults), then flags.
    pub fn to_config(&self) -> Result<TournamentConfig> {
        let mut config = match &self.config {
            Some(path) => TournamentConfig::load(path)?,
            None => TournamentConfig::default(),
        };

        match self.agents.len() {
            0 => {}
            2 => {
                config.agents = self
                    .agents
                    .iter()
                    .map(|program| AgentConfig {
                        label: None,
                        command: CommandConfig::new(program.clone()),
                    })
                    .collect();
            }
            n => bail!("expected two agent programs, got {n}"),
        }

        if self.labels.len() > config.agents.len() {
            bail!(
                "{} labels given for {} agents",
                self.labels.len(),
                config.agents.len()
            );
        }
        for (agent, label) in config.agents.iter_mut().zip(&self.labels) {
            agent.label = Some(label.clone());
        }

        if let Some(games) = self.games {
            config.games = games;
        }
        if let Some(depth) = self.depth {
            config.depth = depth;
        }
        if let Some(plies) = self.opening_plies {
            config.opening_plies = plies;
        }
        if let Some(start) = &self.start_position {
            config.start_position = Some(start.clone());
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(oracle) = &self.oracle {
            config.oracle = CommandConfig::new(oracle.clone());
        }
        if let Some(mover) = &self.random_mover {
            config.random_mover = CommandConfig::new(mover.clone());
        }

        Ok(config)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
