//! Core values and collaborator interfaces for oracle-driven board game matches.
//!
//! The rules of the game live in an external oracle and the players are
//! external agents. This crate only defines the opaque values passed between
//! them and the traits the match orchestration talks to.

pub mod error;
pub mod types;

pub use error::*;
pub use types::*;


// =============================================================================
// Collaborator traits
// =============================================================================

/// The rules and scoring authority.
///
/// Implementations must be deterministic: `evaluate` is a pure function of
/// the position, and `apply` always yields the same successor for the same
/// input. Legality is the oracle's concern; an illegal move is reported as
/// an error.
pub trait OracleClient {
    /// Canonical start position.
    fn initial_position(&mut self) -> Result<Position, ArenaError>;

    /// Terminality and raw score (relative to the side to move).
    fn evaluate(&mut self, pos: &Position) -> Result<GameOutcome, ArenaError>;

    /// Successor position after playing `mv`.
    fn apply(&mut self, pos: &Position, mv: &Move) -> Result<Position, ArenaError>;
}

/// Something that proposes a move for a position.
pub trait AgentClient {
    /// Choose a move. `depth` is the search-depth setting passed to
    /// competing agents; move sources that take no depth receive `None`.
    fn choose_move(&mut self, pos: &Position, depth: Option<u8>) -> Result<Move, ArenaError>;
}

/// A participant: reporting label plus the move source behind it.
pub struct Agent {
    pub label: String,
    pub client: Box<dyn AgentClient>,
}

impl Agent {
    pub fn new(label: impl Into<String>, client: Box<dyn AgentClient>) -> Self {
        Self {
            label: label.into(),
            client,
        }
    }
}

impl std::fmt::Debug for Agent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Agent").field("label", &self.label).finish()
    }
}
