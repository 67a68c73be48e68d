//! Sample data fixtures for testing.
//!
//! Ready-made play-by-play data for other crates to test against. Enable
//! the `test-fixtures` feature to access these helpers.
//!
//! # Example
//!
//! ```ignore
//! // In your Cargo.toml:
//! // [dev-dependencies]
//! // pbp-events = { path = "../pbp-events", features = ["test-fixtures"] }
//!
//! use pbp_events::fixtures;
//!
//! let raw = fixtures::sample_game_log();
//! ```

use crate::RawEvent;

/// Returns the sample raw game log from the fixtures file.
///
/// A first-quarter slice of a BOS (home) vs GSW (away) game with 17 rows
/// covering the full taxonomy surface: a jump ball, made and missed
/// threes, a plain jumper, a layup and a dunk, both free-throw outcomes,
/// a rebound, a turnover with steal text, a combined offensive-foul
/// turnover, a block, a substitution, a timeout, and a period end. One
/// free-throw row omits the team tricode to exercise side-based fallback.
///
/// Expected aggregate for the default configuration: BOS 9, GSW 4, one
/// 9-point BOS run.
pub fn sample_game_log() -> Vec<RawEvent> {
    let jsonl = include_str!("../tests/fixtures/sample_game.jsonl");
    jsonl
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| {
            RawEvent::from_jsonl(l)
                .unwrap_or_else(|e| panic!("Failed to parse fixture line: {}\nError: {}", l, e))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_game_log_parses() {
        let log = sample_game_log();
        assert_eq!(log.len(), 17);
        assert!(log.iter().all(|r| r.period == 1));
        // The second free throw and the period end leave the tricode
        // to fallback resolution
        assert_eq!(log.iter().filter(|r| r.explicit_team().is_none()).count(), 2);
    }
}
