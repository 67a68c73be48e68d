//! Summary Types
//!
//! Per-team accumulators and the final game summary artifact. The
//! aggregation logic that fills these lives in the `recap` crate; the
//! types are shared so downstream consumers can deserialize summaries
//! without pulling in the aggregator.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Box-score style counters for one team.
///
/// Created zero-valued on first reference and accumulated monotonically
/// across a single aggregation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamStats {
    pub points: u32,
    pub fg_made: u32,
    pub fg_attempts: u32,
    pub three_made: u32,
    pub three_attempts: u32,
    pub ft_made: u32,
    pub ft_attempts: u32,
    pub turnovers: u32,
    pub rebounds: u32,
    pub fouls: u32,
    pub steals: u32,
}

impl TeamStats {
    /// Formats a made/attempted pair as a shooting line, e.g. `"5/12"`.
    pub fn shooting_line(made: u32, attempts: u32) -> String {
        format!("{}/{}", made, attempts)
    }

    /// The team's field-goal line.
    pub fn field_goal_line(&self) -> String {
        Self::shooting_line(self.fg_made, self.fg_attempts)
    }

    /// The team's three-point line.
    pub fn three_point_line(&self) -> String {
        Self::shooting_line(self.three_made, self.three_attempts)
    }

    /// The team's free-throw line.
    pub fn free_throw_line(&self) -> String {
        Self::shooting_line(self.ft_made, self.ft_attempts)
    }
}

/// A detected scoring run: consecutive scoring by one team totaling at
/// least the configured threshold before the opponent scores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringRun {
    /// Team tricode credited with the run.
    pub team: String,
    /// Total points scored during the run.
    pub points: u32,
}

impl ScoringRun {
    /// Creates a scoring run.
    pub fn new(team: impl Into<String>, points: u32) -> Self {
        Self {
            team: team.into(),
            points,
        }
    }
}

/// The final artifact of one aggregation pass.
///
/// Immutable once produced. Every keyed map uses the two resolved team
/// tricodes (`teams[0]` = first team observed in the event sequence).
/// `BTreeMap` keeps serialization order deterministic, so aggregating the
/// same input twice yields byte-identical output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSummary {
    /// The two team tricodes in first-appearance order.
    pub teams: [String; 2],
    /// Final score keyed by tricode.
    pub final_score: BTreeMap<String, u32>,
    /// Three-point shooting lines ("made/attempts") keyed by tricode.
    pub three_pointers: BTreeMap<String, String>,
    /// Field-goal shooting lines keyed by tricode.
    pub field_goals: BTreeMap<String, String>,
    /// Free-throw shooting lines keyed by tricode.
    pub free_throws: BTreeMap<String, String>,
    pub turnovers: BTreeMap<String, u32>,
    pub rebounds: BTreeMap<String, u32>,
    pub fouls: BTreeMap<String, u32>,
    pub steals: BTreeMap<String, u32>,
    /// Detected scoring runs in chronological order.
    pub scoring_runs: Vec<ScoringRun>,
    /// Derived natural-language recap. A convenience string; consumers
    /// needing exact numbers must read the structured fields.
    pub narrative: String,
}

impl GameSummary {
    /// Final score for one team; 0 for an unknown tricode.
    pub fn score_for(&self, team: &str) -> u32 {
        self.final_score.get(team).copied().unwrap_or(0)
    }

    /// Serializes the summary to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Serializes the summary to compact JSON (single line).
    pub fn to_json_compact(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
