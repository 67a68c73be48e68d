//! Narrative Generation
//!
//! Deterministic template filling over the aggregated numbers: winner
//! and margin, a three-point comparison, the winner's turnover count,
//! and one clause per detected scoring run in order of occurrence. The
//! narrative is a convenience string; the structured summary fields are
//! the source of truth.

use pbp_events::{ScoringRun, TeamStats};

use crate::config::NarrativeConfig;

/// Builds the recap narrative for one game.
///
/// Teams are passed in first-appearance order. A tied final score gets a
/// dedicated sentence naming both teams and the shared total; no winner
/// is invented.
pub fn build_narrative(
    team_a: &str,
    a: &TeamStats,
    team_b: &str,
    b: &TeamStats,
    runs: &[ScoringRun],
    config: &NarrativeConfig,
) -> String {
    let mut sentences: Vec<String> = Vec::new();

    if a.points == b.points {
        sentences.push(format!(
            "{} and {} played to a {}-{} tie.",
            team_a, team_b, a.points, b.points
        ));
    } else {
        let (winner, winner_stats, loser, loser_stats) = if a.points > b.points {
            (team_a, a, team_b, b)
        } else {
            (team_b, b, team_a, a)
        };
        let margin = winner_stats.points - loser_stats.points;

        sentences.push(format!(
            "{} defeated {} by {} points.",
            winner, loser, margin
        ));
        sentences.push(format!(
            "{} made {} threes compared to {} by {}.",
            winner,
            winner_stats.three_point_line(),
            loser_stats.three_point_line(),
            loser
        ));
        sentences.push(format!(
            "{} committed {} turnovers.",
            winner, winner_stats.turnovers
        ));
    }

    if config.include_runs {
        for run in runs {
            sentences.push(format!("{} had a {}-point run.", run.team, run.points));
        }
    }

    sentences.join(" ")
}
