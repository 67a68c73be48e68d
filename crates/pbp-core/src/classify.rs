//! Event Classification
//!
//! Turns one [`RawEvent`] into at most one [`NormalizedEvent`]. The
//! classifier never fails: unrecognized text becomes
//! [`EventKind::Other`], unresolved teams become the sentinel, and rows
//! with no description text on either side are dropped.

use pbp_events::{
    ActionHint, EventKind, NormalizedEvent, RawEvent, TeamSide, UNKNOWN_PLAYER,
};

use crate::rules::{kind_from_description, kind_from_hint};
use crate::team::TeamResolver;

/// Classifies a single raw record.
///
/// Returns `None` only when both description sides are blank; such rows
/// contribute nothing to the normalized sequence. The resolver carries
/// the per-game attribution state and must be shared across all records
/// of one game, in source order.
pub fn classify_event(raw: &RawEvent, teams: &mut TeamResolver) -> Option<NormalizedEvent> {
    let (text_side, text) = raw.primary_description()?;
    let upper = text.to_uppercase();

    // A recognized structured hint takes precedence over keyword
    // scanning; an unrecognized one is silently ignored.
    let hint = raw
        .action_hint
        .as_deref()
        .and_then(|h| h.parse::<ActionHint>().ok());
    let kind = match hint {
        Some(hint) => kind_from_hint(hint, &upper),
        None => kind_from_description(&upper),
    };

    // Bench memory is keyed by the text side even for game-level plays,
    // but the event itself reports those as neutral.
    let team = teams.resolve(text_side, raw.explicit_team());
    let side = match kind {
        EventKind::JumpBall | EventKind::PeriodStart | EventKind::PeriodEnd => TeamSide::Neutral,
        _ => text_side,
    };

    let player = raw
        .player
        .as_deref()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .or_else(|| extract_player(text))
        .unwrap_or_else(|| UNKNOWN_PLAYER.to_string());

    // Explicit point annotations are a noisy signal (often a running
    // player total); the canonical value for the kind always wins.
    if let Some(annotated) = extract_point_annotation(&upper) {
        if kind.is_scoring() && annotated != kind.canonical_points() {
            tracing::warn!(
                annotated,
                canonical = kind.canonical_points(),
                description = text,
                "point annotation disagrees with event kind, keeping canonical value"
            );
        }
    }

    Some(NormalizedEvent::new(
        raw.period,
        raw.clock.as_str(),
        side,
        team,
        player,
        kind,
        text,
    ))
}

/// Classifies a full game log in source order with a fresh resolver.
///
/// Rows with blank descriptions are dropped, so the output may be
/// shorter than the input.
pub fn classify_game(raw: &[RawEvent]) -> Vec<NormalizedEvent> {
    let mut resolver = TeamResolver::new();
    raw.iter()
        .filter_map(|r| classify_event(r, &mut resolver))
        .collect()
}

/// Extracts the leading name-like prefix of a description: letters,
/// apostrophes, periods, hyphens and spaces, terminated by the first
/// digit or other punctuation. Returns `None` when the prefix is empty.
fn extract_player(text: &str) -> Option<String> {
    let prefix: String = text
        .chars()
        .take_while(|c| c.is_alphabetic() || matches!(c, ' ' | '\'' | '.' | '-'))
        .collect();
    let trimmed = prefix.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Parses an explicit `"(N PTS)"` style annotation from the upper-cased
/// description, purely as a sanity-check signal.
fn extract_point_annotation(upper: &str) -> Option<u32> {
    let mut rest = upper;
    while let Some(open) = rest.find('(') {
        let tail = &rest[open + 1..];
        let digits: &str = &tail[..tail
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(tail.len())];
        if !digits.is_empty() {
            let after = tail[digits.len()..].trim_start();
            if after.starts_with("PTS)") || after.starts_with("PT)") {
                return digits.parse().ok();
            }
        }
        rest = tail;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use pbp_events::UNKNOWN_TEAM;

    #[test]
    fn test_classify_hinted_three() {
        // Scenario: away-side three with a structured hint
        let raw = RawEvent::new(1, "11:42")
            .with_away_description("Curry 28' 3PT Jump Shot (3 PTS)")
            .with_action_hint("3pt")
            .with_team("GSW");

        let mut resolver = TeamResolver::new();
        let event = classify_event(&raw, &mut resolver).unwrap();

        assert_eq!(event.kind, EventKind::ThreeMade);
        assert_eq!(event.points, 3);
        assert_eq!(event.side, TeamSide::Away);
        assert_eq!(event.team, "GSW");
        assert_eq!(event.player, "Curry");
    }

    #[test]
    fn test_classify_hinted_missed_layup() {
        let raw = RawEvent::new(2, "4:11")
            .with_home_description("MISS Smith Layup")
            .with_action_hint("2pt");

        let mut resolver = TeamResolver::new();
        let event = classify_event(&raw, &mut resolver).unwrap();

        assert_eq!(event.kind, EventKind::LayupMissed);
        assert_eq!(event.points, 0);
    }

    #[test]
    fn test_blank_descriptions_drop_the_record() {
        let raw = RawEvent::new(1, "10:00").with_team("BOS");
        let mut resolver = TeamResolver::new();
        assert!(classify_event(&raw, &mut resolver).is_none());

        let whitespace = RawEvent::new(1, "10:00")
            .with_home_description("   ")
            .with_away_description("");
        assert!(classify_event(&whitespace, &mut resolver).is_none());
    }

    #[test]
    fn test_unrecognized_hint_falls_back_to_keywords() {
        let raw = RawEvent::new(1, "8:00")
            .with_home_description("Tatum Cutting Dunk")
            .with_action_hint("highlight_reel");

        let mut resolver = TeamResolver::new();
        let event = classify_event(&raw, &mut resolver).unwrap();
        assert_eq!(event.kind, EventKind::DunkMade);
    }

    #[test]
    fn test_noisy_annotation_does_not_override_canonical_points() {
        // "(4 PTS)" is the player's running total, not the shot value
        let raw = RawEvent::new(1, "10:40")
            .with_home_description("Brown Driving Layup (4 PTS)")
            .with_team("BOS");

        let mut resolver = TeamResolver::new();
        let event = classify_event(&raw, &mut resolver).unwrap();
        assert_eq!(event.kind, EventKind::LayupMade);
        assert_eq!(event.points, 2);
    }

    #[test]
    fn test_team_fallback_within_game() {
        let mut resolver = TeamResolver::new();

        let first = RawEvent::new(1, "9:05")
            .with_away_description("Wiggins Free Throw 1 of 2 (1 PTS)")
            .with_team("GSW");
        let second = RawEvent::new(1, "9:05")
            .with_away_description("MISS Wiggins Free Throw 2 of 2");

        let _ = classify_event(&first, &mut resolver).unwrap();
        let event = classify_event(&second, &mut resolver).unwrap();
        assert_eq!(event.team, "GSW");
        assert_eq!(event.kind, EventKind::FreeThrowMissed);
    }

    #[test]
    fn test_unresolvable_team_uses_sentinel() {
        let raw = RawEvent::new(1, "11:58").with_home_description("Horford REBOUND");
        let mut resolver = TeamResolver::new();
        let event = classify_event(&raw, &mut resolver).unwrap();
        assert_eq!(event.team, UNKNOWN_TEAM);
        assert_eq!(event.side, TeamSide::Home);
    }

    #[test]
    fn test_game_level_plays_are_neutral() {
        let raw = RawEvent::new(1, "0:00")
            .with_home_description("End of 1st Period")
            .with_action_hint("period_end");
        let mut resolver = TeamResolver::new();
        let event = classify_event(&raw, &mut resolver).unwrap();
        assert_eq!(event.kind, EventKind::PeriodEnd);
        assert_eq!(event.side, TeamSide::Neutral);
    }

    #[test]
    fn test_player_prefers_explicit_field() {
        let raw = RawEvent::new(1, "7:21")
            .with_home_description("MISS Tatum 18' Jump Shot")
            .with_player("Jayson Tatum");
        let mut resolver = TeamResolver::new();
        let event = classify_event(&raw, &mut resolver).unwrap();
        assert_eq!(event.player, "Jayson Tatum");
    }

    #[test]
    fn test_player_extraction_stops_at_first_digit() {
        assert_eq!(extract_player("Curry 28' 3PT Jump Shot"), Some("Curry".to_string()));
        assert_eq!(
            extract_player("O'Neal Jr. Tip Shot"),
            Some("O'Neal Jr. Tip Shot".to_string())
        );
        assert_eq!(extract_player("(8:24) violation"), None);
    }

    #[test]
    fn test_player_defaults_to_unknown() {
        let raw = RawEvent::new(1, "5:00").with_away_description("24 second violation");
        let mut resolver = TeamResolver::new();
        let event = classify_event(&raw, &mut resolver).unwrap();
        assert_eq!(event.player, UNKNOWN_PLAYER);
    }

    #[test]
    fn test_point_annotation_parsing() {
        assert_eq!(extract_point_annotation("CURRY 3PT (3 PTS)"), Some(3));
        assert_eq!(extract_point_annotation("FREE THROW (1 PT)"), Some(1));
        assert_eq!(extract_point_annotation("LAYUP (12PTS)"), Some(12));
        // Stat parentheticals that are not point annotations
        assert_eq!(extract_point_annotation("REBOUND (OFF:0 DEF:1)"), None);
        assert_eq!(extract_point_annotation("STEAL (2 STL)"), None);
        assert_eq!(extract_point_annotation("NO PARENS HERE"), None);
    }

    #[test]
    fn test_classify_game_drops_blank_rows() {
        let raws = vec![
            RawEvent::new(1, "12:00").with_home_description("Tatum 18' Jump Shot").with_team("BOS"),
            RawEvent::new(1, "11:40"),
            RawEvent::new(1, "11:20").with_away_description("Curry 3PT Jump Shot").with_team("GSW"),
        ];
        let events = classify_game(&raws);
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].team, "BOS");
        assert_eq!(events[1].team, "GSW");
    }
}
