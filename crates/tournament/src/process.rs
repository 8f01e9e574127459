//! Oracle and agents backed by external programs
//!
//! Every call spawns the program once and waits for it to exit. Arguments
//! are passed as separate argv entries; nothing goes through a shell.

use game_core::{AgentClient, ArenaError, GameOutcome, Move, OracleCall, OracleClient, Position};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::trace;

/// Run `program` and return its stdout, or a reason why the call failed.
///
/// On unix the child gets its own process group, so a terminal Ctrl-C only
/// reaches the tournament itself and the call in flight runs to completion.
fn run_program<I, S>(program: &Path, args: I) -> Result<String, String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let mut cmd = Command::new(program);
    cmd.args(args);
    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;
        cmd.process_group(0);
    }

    let output = cmd
        .output()
        .map_err(|e| format!("failed to run {}: {}", program.display(), e))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(format!("{} ({})", output.status, stderr.trim()));
    }

    String::from_utf8(output.stdout).map_err(|_| "output is not valid UTF-8".to_string())
}

/// Parse an evaluation line of the form `<is_terminal> <raw_score>`.
pub fn parse_evaluation(text: &str) -> Option<GameOutcome> {
    let mut parts = text.split_whitespace();
    let is_terminal = parts.next()?.parse::<bool>().ok()?;
    let raw_score = parts.next()?.parse::<i32>().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(GameOutcome {
        is_terminal,
        raw_score,
    })
}

/// Extract the move from agent output. The last non-empty line must be a
/// single token (`c3w`) or a labelled one (`Move: c3w`); anything else, such
/// as `no legal moves`, is not a move.
pub fn parse_move(text: &str) -> Option<Move> {
    let line = text.lines().rev().find(|l| !l.trim().is_empty())?.trim();
    let token = line.strip_prefix("Move:").unwrap_or(line);
    Move::from_token(token)
}

/// Oracle program answering according to its argument count:
/// no argument prints the initial position, a position prints
/// `<is_terminal> <raw_score>`, a position and a move print the successor.
#[derive(Debug, Clone)]
pub struct ProcessOracle {
    program: PathBuf,
    args: Vec<String>,
}

impl ProcessOracle {
    pub fn new(program: impl Into<PathBuf>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    fn call(&self, call: OracleCall, extra: &[&str]) -> Result<String, ArenaError> {
        trace!(program = %self.program.display(), %call, ?extra, "oracle call");
        run_program(&self.program, self.args.iter().map(String::as_str).chain(extra.iter().copied()))
            .map_err(|reason| ArenaError::oracle(call, reason))
    }

    fn position(call: OracleCall, text: &str) -> Result<Position, ArenaError> {
        Position::from_text(text).ok_or_else(|| ArenaError::oracle(call, "empty position"))
    }
}

impl OracleClient for ProcessOracle {
    fn initial_position(&mut self) -> Result<Position, ArenaError> {
        let out = self.call(OracleCall::InitialPosition, &[])?;
        Self::position(OracleCall::InitialPosition, &out)
    }

    fn evaluate(&mut self, pos: &Position) -> Result<GameOutcome, ArenaError> {
        let out = self.call(OracleCall::Evaluate, &[pos.as_str()])?;
        parse_evaluation(&out).ok_or_else(|| {
            ArenaError::oracle(
                OracleCall::Evaluate,
                format!("unparsable evaluation {:?}", out.trim()),
            )
        })
    }

    fn apply(&mut self, pos: &Position, mv: &Move) -> Result<Position, ArenaError> {
        let out = self.call(OracleCall::Apply, &[pos.as_str(), mv.as_str()])?;
        Self::position(OracleCall::Apply, &out)
    }
}

/// Agent program invoked as `<program> <args...> [-d <depth>] <position>`.
#[derive(Debug, Clone)]
pub struct ProcessAgent {
    name: String,
    program: PathBuf,
    args: Vec<String>,
}

impl ProcessAgent {
    pub fn new(name: impl Into<String>, program: impl Into<PathBuf>, args: Vec<String>) -> Self {
        Self {
            name: name.into(),
            program: program.into(),
            args,
        }
    }
}

impl AgentClient for ProcessAgent {
    fn choose_move(&mut self, pos: &Position, depth: Option<u8>) -> Result<Move, ArenaError> {
        let mut argv: Vec<String> = self.args.clone();
        if let Some(depth) = depth {
            argv.push("-d".to_string());
            argv.push(depth.to_string());
        }
        argv.push(pos.as_str().to_string());

        trace!(agent = %self.name, ?argv, "agent call");
        let out = run_program(&self.program, &argv)
            .map_err(|reason| ArenaError::agent(&self.name, reason))?;
        parse_move(&out).ok_or_else(|| ArenaError::agent(&self.name, "no move in output"))
    }
}

#[cfg(test)]
#[path = "process_tests.rs"]
mod process_tests;
