//! Result aggregation and reporting

use game_core::ArenaError;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

use crate::score::MatchResult;

/// What a completed game is counted under
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OutcomeLabel {
    Agent(String),
    Draw,
}

impl OutcomeLabel {
    pub fn of(result: &MatchResult, labels: &[String; 2]) -> Self {
        match result.winner {
            Some(seat) => OutcomeLabel::Agent(labels[seat.idx()].clone()),
            None => OutcomeLabel::Draw,
        }
    }
}

impl fmt::Display for OutcomeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutcomeLabel::Agent(label) => f.write_str(label),
            OutcomeLabel::Draw => f.write_str("draw"),
        }
    }
}

/// Count of completed games per outcome label
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally {
    counts: HashMap<OutcomeLabel, u32>,
}

impl Tally {
    pub fn from_results(results: &[MatchResult], labels: &[String; 2]) -> Self {
        let mut counts = HashMap::new();
        for result in results {
            *counts.entry(OutcomeLabel::of(result, labels)).or_insert(0) += 1;
        }
        Self { counts }
    }

    pub fn get(&self, label: &OutcomeLabel) -> u32 {
        self.counts.get(label).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u32 {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Entries with the most frequent label first. Equal counts are ordered
    /// by label only to keep the printout stable.
    pub fn entries(&self) -> Vec<(&OutcomeLabel, u32)> {
        let mut entries: Vec<_> = self.counts.iter().map(|(l, c)| (l, *c)).collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries
    }
}

impl Serialize for Tally {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let entries = self.entries();
        let mut map = serializer.serialize_map(Some(entries.len()))?;
        for (label, count) in entries {
            map.serialize_entry(&label.to_string(), &count)?;
        }
        map.end()
    }
}

/// Why the tournament loop stopped
#[derive(Debug)]
pub enum Termination {
    /// All requested games were played
    Completed,
    /// Cancellation was requested between games
    Cancelled,
    /// A collaborator failed; the game in flight was discarded
    Aborted(ArenaError),
}

impl Termination {
    pub fn is_abnormal(&self) -> bool {
        matches!(self, Termination::Aborted(_))
    }
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Termination::Completed => f.write_str("completed"),
            Termination::Cancelled => f.write_str("cancelled"),
            Termination::Aborted(err) => write!(f, "aborted: {err}"),
        }
    }
}

/// Everything a tournament produced
#[derive(Debug)]
pub struct TournamentReport {
    /// Seat labels, in reporting order
    pub labels: [String; 2],
    pub games_planned: u32,
    /// Completed games only, in play order
    pub results: Vec<MatchResult>,
    pub termination: Termination,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    labels: &'a [String; 2],
    games_planned: u32,
    games_completed: usize,
    termination: String,
    tally: Tally,
    results: &'a [MatchResult],
}

impl TournamentReport {
    pub fn tally(&self) -> Tally {
        Tally::from_results(&self.results, &self.labels)
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!(
            "=== Tally: {} vs {} ===\n",
            self.labels[0], self.labels[1]
        ));
        report.push_str(&format!(
            "Games: {}/{} ({})\n\n",
            self.results.len(),
            self.games_planned,
            self.termination
        ));

        report.push_str(&format!("{:<30} {:>6}\n", "Outcome", "Count"));
        report.push_str(&"-".repeat(37));
        report.push('\n');

        for (label, count) in self.tally().entries() {
            report.push_str(&format!("{:<30} {:>6}\n", label.to_string(), count));
        }

        report
    }

    /// Print report to stdout
    pub fn print_report(&self) {
        println!("{}", self.generate_report());
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&JsonReport {
            labels: &self.labels,
            games_planned: self.games_planned,
            games_completed: self.results.len(),
            termination: self.termination.to_string(),
            tally: self.tally(),
            results: &self.results,
        })
    }
}

#[cfg(test)]
#[path = "results_tests.rs"]
mod results_tests;
