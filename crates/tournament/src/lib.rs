//! Tournament runner for oracle-refereed board games
//!
//! This crate provides infrastructure for:
//! - Playing single games between two external agents, refereed by an oracle
//! - Randomizing openings and first movers
//! - Normalizing oracle scores to the fixed seat order
//! - Running many games with Ctrl-C safe result tallies
//!
//! # Usage
//!
//! ```bash
//! # 40 games between two agent programs
//! cargo run -p tournament -- ./minicou ./alphacou
//!
//! # Fixed start position, 4 random opening plies, reproducible seats
//! cargo run -p tournament -- ./minicou ./alphacou -n 100 --opening-plies 4 --seed 7
//! ```

mod config;
mod match_runner;
mod process;
mod results;
mod score;
mod tournament;

#[cfg(test)]
mod test_support;

pub use config::*;
pub use match_runner::*;
pub use process::*;
pub use results::*;
pub use score::*;
pub use tournament::*;
