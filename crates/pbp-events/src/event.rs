//! Normalized Event Types
//!
//! The fixed play taxonomy and the normalized event record produced by
//! classification. These are pure data definitions; all classification
//! logic lives in `pbp-core`.

use serde::{Deserialize, Serialize};

/// Sentinel team identifier for records whose team could not be resolved.
pub const UNKNOWN_TEAM: &str = "UNK";

/// Sentinel player name for records with no recognizable player prefix.
pub const UNKNOWN_PLAYER: &str = "Unknown";

/// Which bench a play is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TeamSide {
    Home,
    Away,
    /// Plays that belong to the game rather than a team (period
    /// boundaries, jump balls).
    Neutral,
    /// Attribution could not be determined from the source row.
    Unknown,
}

impl Default for TeamSide {
    fn default() -> Self {
        TeamSide::Unknown
    }
}

impl TeamSide {
    /// Returns the opposite bench. `Neutral` and `Unknown` map to
    /// themselves.
    pub fn opposite(self) -> Self {
        match self {
            TeamSide::Home => TeamSide::Away,
            TeamSide::Away => TeamSide::Home,
            other => other,
        }
    }
}

/// The closed set of play categories.
///
/// Exactly one kind per normalized event. Layup and dunk variants are
/// display specializations of a two-point shot and count toward two-point
/// field-goal totals; three-pointers and free throws are tracked
/// separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    ThreeMade,
    ThreeMissed,
    TwoMade,
    TwoMissed,
    LayupMade,
    LayupMissed,
    DunkMade,
    DunkMissed,
    FreeThrowMade,
    FreeThrowMissed,
    Rebound,
    Foul,
    FoulTurnover,
    Steal,
    Turnover,
    Block,
    Substitution,
    Timeout,
    JumpBall,
    PeriodStart,
    PeriodEnd,
    Other,
}

impl EventKind {
    /// Returns the canonical point value for this kind.
    ///
    /// Non-zero only for made shots and made free throws. Explicit point
    /// annotations in source text are cross-checked against this value and
    /// never override it.
    pub fn canonical_points(self) -> u32 {
        match self {
            EventKind::ThreeMade => 3,
            EventKind::TwoMade | EventKind::LayupMade | EventKind::DunkMade => 2,
            EventKind::FreeThrowMade => 1,
            _ => 0,
        }
    }

    /// Returns true if this kind scores points.
    pub fn is_scoring(self) -> bool {
        self.canonical_points() > 0
    }

    /// Returns true if this kind counts as a field-goal attempt
    /// (two-pointers, layups, dunks, and threes; free throws excluded).
    pub fn is_field_goal_attempt(self) -> bool {
        matches!(
            self,
            EventKind::ThreeMade
                | EventKind::ThreeMissed
                | EventKind::TwoMade
                | EventKind::TwoMissed
                | EventKind::LayupMade
                | EventKind::LayupMissed
                | EventKind::DunkMade
                | EventKind::DunkMissed
        )
    }

    /// Returns true if this kind counts as a three-point attempt.
    pub fn is_three_attempt(self) -> bool {
        matches!(self, EventKind::ThreeMade | EventKind::ThreeMissed)
    }

    /// Returns true if this kind counts as a free-throw attempt.
    pub fn is_free_throw_attempt(self) -> bool {
        matches!(self, EventKind::FreeThrowMade | EventKind::FreeThrowMissed)
    }

    /// Returns true for the made variant of any shot kind.
    pub fn is_made(self) -> bool {
        matches!(
            self,
            EventKind::ThreeMade
                | EventKind::TwoMade
                | EventKind::LayupMade
                | EventKind::DunkMade
                | EventKind::FreeThrowMade
        )
    }

    /// Returns all kind variants.
    pub fn all() -> &'static [EventKind] {
        &[
            EventKind::ThreeMade,
            EventKind::ThreeMissed,
            EventKind::TwoMade,
            EventKind::TwoMissed,
            EventKind::LayupMade,
            EventKind::LayupMissed,
            EventKind::DunkMade,
            EventKind::DunkMissed,
            EventKind::FreeThrowMade,
            EventKind::FreeThrowMissed,
            EventKind::Rebound,
            EventKind::Foul,
            EventKind::FoulTurnover,
            EventKind::Steal,
            EventKind::Turnover,
            EventKind::Block,
            EventKind::Substitution,
            EventKind::Timeout,
            EventKind::JumpBall,
            EventKind::PeriodStart,
            EventKind::PeriodEnd,
            EventKind::Other,
        ]
    }
}

/// A play after classification into the fixed taxonomy.
///
/// One normalized event per usable source row, in source order. The raw
/// description is retained for audit and narrative debugging; downstream
/// consumers should not depend on it beyond display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedEvent {
    /// Period number (1-based; 5 and up are overtime).
    pub period: u32,
    /// Game-clock display string, not parsed further.
    pub clock: String,
    /// Bench attribution.
    pub side: TeamSide,
    /// Team tricode, or [`UNKNOWN_TEAM`] when unresolved.
    pub team: String,
    /// Best-effort player name, or [`UNKNOWN_PLAYER`].
    pub player: String,
    /// Taxonomy tag.
    pub kind: EventKind,
    /// Canonical point value for `kind`; 0 unless the event scores.
    pub points: u32,
    /// Raw description text the classification was derived from.
    pub description: String,
}

impl NormalizedEvent {
    /// Creates a normalized event with the canonical point value for its
    /// kind.
    pub fn new(
        period: u32,
        clock: impl Into<String>,
        side: TeamSide,
        team: impl Into<String>,
        player: impl Into<String>,
        kind: EventKind,
        description: impl Into<String>,
    ) -> Self {
        Self {
            period,
            clock: clock.into(),
            side,
            team: team.into(),
            player: player.into(),
            kind,
            points: kind.canonical_points(),
            description: description.into(),
        }
    }

    /// Returns true if this event scores points.
    pub fn is_scoring(&self) -> bool {
        self.points > 0
    }

    /// Returns true if the team identifier is resolved.
    pub fn has_known_team(&self) -> bool {
        self.team != UNKNOWN_TEAM
    }

    /// Serializes the event to a JSON line (for JSONL format).
    pub fn to_jsonl(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserializes an event from a JSON line.
    pub fn from_jsonl(line: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(line)
    }
}
