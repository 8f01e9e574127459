//! In-process oracle and agents for unit tests.
//!
//! Positions are the word `start` followed by every move applied so far, so a
//! judge closure can decide outcomes from the move history alone.

use game_core::{Agent, AgentClient, ArenaError, GameOutcome, Move, OracleCall, OracleClient, Position};
use std::cell::RefCell;
use std::rc::Rc;

use crate::tournament::CancelToken;

pub type Judge = Box<dyn Fn(&[&str]) -> GameOutcome>;

pub struct ScriptedOracle {
    initial: Position,
    judge: Judge,
    pub calls: Vec<String>,
    pub terminal_reports: u32,
    cancel_after: Option<(u32, CancelToken)>,
    fail_apply_after: Option<usize>,
}

impl ScriptedOracle {
    pub fn new(judge: impl Fn(&[&str]) -> GameOutcome + 'static) -> Self {
        Self {
            initial: Position::from_text("start").unwrap(),
            judge: Box::new(judge),
            calls: Vec::new(),
            terminal_reports: 0,
            cancel_after: None,
            fail_apply_after: None,
        }
    }

    /// Terminal once `plies` moves have been applied, with a fixed score.
    pub fn terminal_after(plies: usize, raw_score: i32) -> Self {
        Self::new(move |moves| {
            if moves.len() >= plies {
                GameOutcome::terminal(raw_score)
            } else {
                GameOutcome::ongoing()
            }
        })
    }

    /// Request cancellation once `games` terminal positions have been reported.
    pub fn cancel_after(mut self, games: u32, token: CancelToken) -> Self {
        self.cancel_after = Some((games, token));
        self
    }

    /// Fail every `apply` once this many applies have succeeded.
    pub fn fail_apply_after(mut self, applies: usize) -> Self {
        self.fail_apply_after = Some(applies);
        self
    }

    pub fn count(&self, prefix: &str) -> usize {
        self.calls.iter().filter(|c| c.starts_with(prefix)).count()
    }
}

pub fn moves_of(pos: &Position) -> Vec<&str> {
    pos.as_str().split_whitespace().skip(1).collect()
}

impl OracleClient for ScriptedOracle {
    fn initial_position(&mut self) -> Result<Position, ArenaError> {
        self.calls.push("init".to_string());
        Ok(self.initial.clone())
    }

    fn evaluate(&mut self, pos: &Position) -> Result<GameOutcome, ArenaError> {
        self.calls.push(format!("eval {pos}"));
        let outcome = (self.judge)(&moves_of(pos));
        if outcome.is_terminal {
            self.terminal_reports += 1;
            if let Some((games, token)) = &self.cancel_after {
                if self.terminal_reports >= *games {
                    token.cancel();
                }
            }
        }
        Ok(outcome)
    }

    fn apply(&mut self, pos: &Position, mv: &Move) -> Result<Position, ArenaError> {
        if let Some(limit) = self.fail_apply_after {
            if self.count("apply") >= limit {
                return Err(ArenaError::oracle(OracleCall::Apply, "illegal move"));
            }
        }
        self.calls.push(format!("apply {pos} {mv}"));
        Ok(Position::from_text(&format!("{pos} {mv}")).unwrap())
    }
}

/// Always answers with the same token and records each request.
pub struct ScriptedAgent {
    token: &'static str,
    log: Rc<RefCell<Vec<(&'static str, Option<u8>)>>>,
}

impl AgentClient for ScriptedAgent {
    fn choose_move(&mut self, _pos: &Position, depth: Option<u8>) -> Result<Move, ArenaError> {
        self.log.borrow_mut().push((self.token, depth));
        Ok(Move::from_token(self.token).unwrap())
    }
}

pub struct FailingAgent;

impl AgentClient for FailingAgent {
    fn choose_move(&mut self, _pos: &Position, _depth: Option<u8>) -> Result<Move, ArenaError> {
        Err(ArenaError::agent("broken", "empty output"))
    }
}

pub type MoveLog = Rc<RefCell<Vec<(&'static str, Option<u8>)>>>;

pub fn scripted_agent(token: &'static str, log: &MoveLog) -> Box<dyn AgentClient> {
    Box::new(ScriptedAgent {
        token,
        log: Rc::clone(log),
    })
}

/// Seat 0 answers `a`, seat 1 answers `b`, both logging into `log`.
pub fn agent_pair(log: &MoveLog) -> [Agent; 2] {
    [
        Agent::new("alpha", scripted_agent("a", log)),
        Agent::new("beta", scripted_agent("b", log)),
    ]
}
