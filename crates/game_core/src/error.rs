use std::fmt;
use thiserror::Error;

/// Which oracle operation failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OracleCall {
    InitialPosition,
    Evaluate,
    Apply,
}

impl fmt::Display for OracleCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OracleCall::InitialPosition => "initial-position",
            OracleCall::Evaluate => "evaluate",
            OracleCall::Apply => "apply",
        };
        f.write_str(name)
    }
}

/// Failure of an external collaborator. Every variant is fatal to a run:
/// after a failed call the game trajectory can no longer be trusted.
#[derive(Debug, Error)]
pub enum ArenaError {
    #[error("oracle {call} failed: {reason}")]
    Oracle { call: OracleCall, reason: String },
    #[error("agent '{agent}' failed: {reason}")]
    Agent { agent: String, reason: String },
}

impl ArenaError {
    pub fn oracle(call: OracleCall, reason: impl Into<String>) -> Self {
        ArenaError::Oracle {
            call,
            reason: reason.into(),
        }
    }

    pub fn agent(agent: impl Into<String>, reason: impl Into<String>) -> Self {
        ArenaError::Agent {
            agent: agent.into(),
            reason: reason.into(),
        }
    }

    pub fn is_oracle_failure(&self) -> bool {
        matches!(self, ArenaError::Oracle { .. })
    }
}
