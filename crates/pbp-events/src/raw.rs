//! Raw Source Records
//!
//! One [`RawEvent`] per source row, exactly as the ingestion layer hands
//! them over. Fields are best-effort: descriptions may be blank, the team
//! tricode may be missing, and the action hint is free text that may not
//! parse. The classifier in `pbp-core` is responsible for making sense of
//! all of that.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::event::TeamSide;

/// One unprocessed play-by-play row.
///
/// Text appears on at most one of the two description sides; the non-empty
/// side determines the provisional bench attribution. All structured
/// fields are optional hints, not guarantees.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawEvent {
    /// Period number as reported by the source.
    pub period: u32,
    /// Game-clock display string (e.g. "11:42").
    #[serde(default)]
    pub clock: String,
    /// Description text on the home side, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_description: Option<String>,
    /// Description text on the away side, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub away_description: Option<String>,
    /// Structured action-type hint (e.g. "3pt", "rebound"); free text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_hint: Option<String>,
    /// Explicit team tricode, authoritative when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    /// Explicit player name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player: Option<String>,
    /// Running home score, when the source carries one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_score: Option<u32>,
    /// Running away score, when the source carries one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub away_score: Option<u32>,
}

impl RawEvent {
    /// Creates a raw event with the required positional fields.
    pub fn new(period: u32, clock: impl Into<String>) -> Self {
        Self {
            period,
            clock: clock.into(),
            ..Self::default()
        }
    }

    /// Sets the home-side description.
    pub fn with_home_description(mut self, text: impl Into<String>) -> Self {
        self.home_description = Some(text.into());
        self
    }

    /// Sets the away-side description.
    pub fn with_away_description(mut self, text: impl Into<String>) -> Self {
        self.away_description = Some(text.into());
        self
    }

    /// Sets the action-type hint.
    pub fn with_action_hint(mut self, hint: impl Into<String>) -> Self {
        self.action_hint = Some(hint.into());
        self
    }

    /// Sets the explicit team tricode.
    pub fn with_team(mut self, team: impl Into<String>) -> Self {
        self.team = Some(team.into());
        self
    }

    /// Sets the explicit player name.
    pub fn with_player(mut self, player: impl Into<String>) -> Self {
        self.player = Some(player.into());
        self
    }

    /// Sets the running score.
    pub fn with_score(mut self, home: u32, away: u32) -> Self {
        self.home_score = Some(home);
        self.away_score = Some(away);
        self
    }

    /// Returns the non-empty description side and its text, trimmed.
    ///
    /// Home text wins when both carry text (the source contract says at
    /// most one side is non-empty; this keeps the function total anyway).
    /// Returns `None` when both sides are blank; such rows contribute no
    /// normalized event.
    pub fn primary_description(&self) -> Option<(TeamSide, &str)> {
        let home = self.home_description.as_deref().map(str::trim).unwrap_or("");
        if !home.is_empty() {
            return Some((TeamSide::Home, home));
        }
        let away = self.away_description.as_deref().map(str::trim).unwrap_or("");
        if !away.is_empty() {
            return Some((TeamSide::Away, away));
        }
        None
    }

    /// Returns the explicit team tricode, trimmed, if present and
    /// non-empty.
    pub fn explicit_team(&self) -> Option<&str> {
        self.team
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }

    /// Serializes the record to a JSON line (for JSONL format).
    pub fn to_jsonl(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserializes a record from a JSON line.
    pub fn from_jsonl(line: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(line)
    }
}

/// Recognized values of the structured action-type hint.
///
/// The raw hint is free text; parsing is lenient about common spellings
/// and case. An unrecognized hint is not an error; the classifier simply
/// falls back to keyword scanning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionHint {
    ThreePoint,
    TwoPoint,
    FreeThrow,
    Rebound,
    Foul,
    Turnover,
    Steal,
    Block,
    Timeout,
    Substitution,
    JumpBall,
    PeriodStart,
    PeriodEnd,
}

/// Error type for parsing an [`ActionHint`] from source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseHintError(pub String);

impl fmt::Display for ParseHintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognized action hint: '{}'", self.0)
    }
}

impl std::error::Error for ParseHintError {}

impl FromStr for ActionHint {
    type Err = ParseHintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "3pt" | "three" | "three_point" => Ok(ActionHint::ThreePoint),
            "2pt" | "two" | "two_point" => Ok(ActionHint::TwoPoint),
            "ft" | "free_throw" => Ok(ActionHint::FreeThrow),
            "rebound" => Ok(ActionHint::Rebound),
            "foul" => Ok(ActionHint::Foul),
            "turnover" => Ok(ActionHint::Turnover),
            "steal" => Ok(ActionHint::Steal),
            "block" => Ok(ActionHint::Block),
            "timeout" => Ok(ActionHint::Timeout),
            "sub" | "substitution" => Ok(ActionHint::Substitution),
            "jump_ball" | "jumpball" => Ok(ActionHint::JumpBall),
            "period_start" | "start_period" => Ok(ActionHint::PeriodStart),
            "period_end" | "end_period" => Ok(ActionHint::PeriodEnd),
            _ => Err(ParseHintError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_description_prefers_home() {
        let raw = RawEvent::new(1, "12:00")
            .with_home_description("Tatum 18' Jump Shot")
            .with_away_description("  ");
        let (side, text) = raw.primary_description().unwrap();
        assert_eq!(side, TeamSide::Home);
        assert_eq!(text, "Tatum 18' Jump Shot");
    }

    #[test]
    fn test_primary_description_away_side() {
        let raw = RawEvent::new(1, "11:42").with_away_description(" Curry 28' 3PT Jump Shot ");
        let (side, text) = raw.primary_description().unwrap();
        assert_eq!(side, TeamSide::Away);
        assert_eq!(text, "Curry 28' 3PT Jump Shot");
    }

    #[test]
    fn test_primary_description_both_blank() {
        let raw = RawEvent::new(3, "0:00").with_home_description("   ");
        assert!(raw.primary_description().is_none());
    }

    #[test]
    fn test_explicit_team_trims_and_filters_empty() {
        let raw = RawEvent::new(1, "10:00").with_team(" BOS ");
        assert_eq!(raw.explicit_team(), Some("BOS"));

        let blank = RawEvent::new(1, "10:00").with_team("  ");
        assert_eq!(blank.explicit_team(), None);

        let absent = RawEvent::new(1, "10:00");
        assert_eq!(absent.explicit_team(), None);
    }

    #[test]
    fn test_action_hint_parsing() {
        assert_eq!("3pt".parse::<ActionHint>().unwrap(), ActionHint::ThreePoint);
        assert_eq!("2PT".parse::<ActionHint>().unwrap(), ActionHint::TwoPoint);
        assert_eq!("ft".parse::<ActionHint>().unwrap(), ActionHint::FreeThrow);
        assert_eq!("free_throw".parse::<ActionHint>().unwrap(), ActionHint::FreeThrow);
        assert_eq!("sub".parse::<ActionHint>().unwrap(), ActionHint::Substitution);
        assert_eq!("jump_ball".parse::<ActionHint>().unwrap(), ActionHint::JumpBall);
        assert!("dance_contest".parse::<ActionHint>().is_err());
    }

    #[test]
    fn test_raw_event_jsonl_roundtrip() {
        let raw = RawEvent::new(2, "7:15")
            .with_away_description("MISS Curry 3PT Jump Shot")
            .with_action_hint("3pt")
            .with_team("GSW")
            .with_player("Curry")
            .with_score(31, 28);

        let line = raw.to_jsonl().unwrap();
        let parsed = RawEvent::from_jsonl(&line).unwrap();
        assert_eq!(parsed, raw);
    }

    #[test]
    fn test_raw_event_minimal_json() {
        // Absent optional fields deserialize to None
        let raw = RawEvent::from_jsonl(r#"{"period":1,"clock":"12:00"}"#).unwrap();
        assert_eq!(raw.period, 1);
        assert!(raw.home_description.is_none());
        assert!(raw.action_hint.is_none());
        assert!(raw.primary_description().is_none());
    }
}
