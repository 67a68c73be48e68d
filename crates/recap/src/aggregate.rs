//! Stat Accumulation
//!
//! The single forward pass that folds a normalized event sequence into
//! per-team counters and assembles the final [`GameSummary`].

use std::collections::BTreeMap;

use pbp_events::{EventKind, GameSummary, NormalizedEvent, TeamStats};

use crate::config::RecapConfig;
use crate::narrative::build_narrative;
use crate::runs::detect_runs;
use crate::teams::TeamRegistry;
use crate::RecapError;

/// Produces game summaries from normalized event sequences.
#[derive(Debug, Clone, Default)]
pub struct Summarizer {
    config: RecapConfig,
}

impl Summarizer {
    /// Creates a summarizer with the given configuration.
    pub fn new(config: RecapConfig) -> Self {
        Self { config }
    }

    /// Creates a summarizer with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(RecapConfig::default())
    }

    /// Returns a reference to the configuration.
    pub fn config(&self) -> &RecapConfig {
        &self.config
    }

    /// Aggregates one game's ordered event sequence into a summary.
    ///
    /// A pure function of its input: the same sequence always yields a
    /// byte-identical summary. Fails only on an empty sequence; missing
    /// team identifiers, a single observed team, and zero detected runs
    /// all degrade into best-effort output.
    pub fn summarize(&self, events: &[NormalizedEvent]) -> Result<GameSummary, RecapError> {
        if events.is_empty() {
            return Err(RecapError::EmptyGame);
        }

        let registry = TeamRegistry::from_events(events);
        let stats = accumulate(events, &registry);
        let runs = detect_runs(events, self.config.runs.point_threshold);

        let [team_a, team_b] = registry.teams();
        let a = stats.get(&team_a).copied().unwrap_or_default();
        let b = stats.get(&team_b).copied().unwrap_or_default();

        tracing::debug!(
            events = events.len(),
            team_a = %team_a,
            team_b = %team_b,
            runs = runs.len(),
            "aggregated game"
        );

        let narrative =
            build_narrative(&team_a, &a, &team_b, &b, &runs, &self.config.narrative);

        Ok(GameSummary {
            final_score: pair(&team_a, a.points, &team_b, b.points),
            three_pointers: pair(
                &team_a,
                a.three_point_line(),
                &team_b,
                b.three_point_line(),
            ),
            field_goals: pair(&team_a, a.field_goal_line(), &team_b, b.field_goal_line()),
            free_throws: pair(&team_a, a.free_throw_line(), &team_b, b.free_throw_line()),
            turnovers: pair(&team_a, a.turnovers, &team_b, b.turnovers),
            rebounds: pair(&team_a, a.rebounds, &team_b, b.rebounds),
            fouls: pair(&team_a, a.fouls, &team_b, b.fouls),
            steals: pair(&team_a, a.steals, &team_b, b.steals),
            teams: [team_a, team_b],
            scoring_runs: runs,
            narrative,
        })
    }
}

/// Builds a two-entry map keyed by tricode.
fn pair<T>(team_a: &str, a: T, team_b: &str, b: T) -> BTreeMap<String, T> {
    let mut map = BTreeMap::new();
    map.insert(team_a.to_string(), a);
    map.insert(team_b.to_string(), b);
    map
}

/// Folds the event sequence into per-team counters.
///
/// Both registry teams get an entry even if they never touch a stat, so
/// summary lookups stay total. Codes outside the registry (a third
/// tricode, the sentinel) still accumulate under their own key; they
/// simply never reach the summary maps.
fn accumulate(
    events: &[NormalizedEvent],
    registry: &TeamRegistry,
) -> BTreeMap<String, TeamStats> {
    let mut stats: BTreeMap<String, TeamStats> = BTreeMap::new();
    for team in registry.teams() {
        stats.entry(team).or_default();
    }

    for event in events {
        let kind = event.kind;

        {
            let team = stats.entry(event.team.clone()).or_default();
            team.points += event.points;

            if kind.is_field_goal_attempt() {
                team.fg_attempts += 1;
                if kind.is_made() {
                    team.fg_made += 1;
                }
                if kind.is_three_attempt() {
                    team.three_attempts += 1;
                    if kind.is_made() {
                        team.three_made += 1;
                    }
                }
            } else if kind.is_free_throw_attempt() {
                team.ft_attempts += 1;
                if kind.is_made() {
                    team.ft_made += 1;
                }
            }

            match kind {
                EventKind::Rebound => team.rebounds += 1,
                EventKind::Foul => team.fouls += 1,
                // A combined offensive foul is both infractions at once
                EventKind::FoulTurnover => {
                    team.fouls += 1;
                    team.turnovers += 1;
                }
                EventKind::Turnover | EventKind::Steal => team.turnovers += 1,
                _ => {}
            }
        }

        // A steal surfaces either as its own event or as steal text on
        // the turnover record; both credit the opposing team exactly
        // once per record.
        let stolen = kind == EventKind::Steal
            || (kind == EventKind::Turnover
                && event.description.to_uppercase().contains("STEAL"));
        if stolen {
            let opponent = registry.opponent_of(&event.team).to_string();
            stats.entry(opponent).or_default().steals += 1;
        }
    }

    stats
}
