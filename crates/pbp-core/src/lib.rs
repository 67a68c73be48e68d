//! Play-by-play classification.
//!
//! Takes raw source rows and produces the normalized, typed event stream
//! consumed by the `recap` aggregator. Classification of a single record
//! is pure; the only state threaded through a game is the explicit
//! [`TeamResolver`], which fills in missing team tricodes from earlier
//! rows of the same game.
//!
//! ```text
//! ┌───────────┐   RawEvent    ┌──────────┐   NormalizedEvent
//! │ ingestion │ ────────────▶ │ pbp-core │ ──────────────────▶ recap
//! └───────────┘    (JSONL)    └──────────┘
//! ```
//!
//! # Modules
//!
//! - [`rules`]: the ordered keyword rule table and hint dispatch
//! - [`classify`]: per-record classification and per-game driving
//! - [`team`]: explicit per-game team tricode resolution
//! - [`reader`]: JSONL game-log reading and writing

pub mod classify;
pub mod reader;
pub mod rules;
pub mod team;

pub use classify::{classify_event, classify_game};
pub use reader::{read_raw_log, read_raw_log_from, write_raw_log, ReadError};
pub use rules::{kind_from_description, kind_from_hint};
pub use team::TeamResolver;

#[cfg(test)]
mod tests {
    use super::*;
    use pbp_events::{fixtures, EventKind, TeamSide};

    #[test]
    fn test_classify_sample_game_log() {
        let raw = fixtures::sample_game_log();
        let events = classify_game(&raw);

        // Every fixture row carries text, so nothing is dropped
        assert_eq!(events.len(), raw.len());

        let kinds: Vec<EventKind> = events.iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![
                EventKind::JumpBall,
                EventKind::ThreeMade,
                EventKind::TwoMade,
                EventKind::ThreeMissed,
                EventKind::Rebound,
                EventKind::LayupMade,
                EventKind::Turnover,
                EventKind::DunkMade,
                EventKind::ThreeMade,
                EventKind::FreeThrowMade,
                EventKind::FreeThrowMissed,
                EventKind::Foul,
                EventKind::FoulTurnover,
                EventKind::Block,
                EventKind::Substitution,
                EventKind::Timeout,
                EventKind::PeriodEnd,
            ]
        );

        // The teamless second free throw resolves through bench memory
        assert_eq!(events[10].team, "GSW");
        assert_eq!(events[10].side, TeamSide::Away);

        // Canonical points survive noisy running-total annotations
        assert_eq!(events[5].points, 2);
        assert_eq!(events[8].points, 3);
    }
}
