//! Team Identity Registry
//!
//! Resolves which two tricodes a game is between. First-appearance order
//! in the event sequence, not home/away, defines the stable key order of
//! the summary: home/away is not guaranteed resolvable from the input,
//! first appearance always is.

use pbp_events::{NormalizedEvent, UNKNOWN_TEAM};

/// Two-slot registry of the teams observed in one game.
///
/// Slots fill with the first two distinct non-sentinel tricodes in order
/// of appearance. An unfilled slot reads as [`UNKNOWN_TEAM`], so lookups
/// stay total for short or malformed games.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TeamRegistry {
    slots: [Option<String>; 2],
}

impl TeamRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from an event sequence.
    pub fn from_events(events: &[NormalizedEvent]) -> Self {
        let mut registry = Self::new();
        for event in events {
            registry.observe(&event.team);
        }
        registry
    }

    /// Records a tricode observation. Sentinel codes and codes beyond
    /// the first two distinct ones are ignored.
    pub fn observe(&mut self, code: &str) {
        if code == UNKNOWN_TEAM || self.contains(code) {
            return;
        }
        if let Some(slot) = self.slots.iter_mut().find(|s| s.is_none()) {
            *slot = Some(code.to_string());
        } else {
            tracing::debug!(code, "third tricode observed, ignoring");
        }
    }

    fn contains(&self, code: &str) -> bool {
        self.slots.iter().any(|s| s.as_deref() == Some(code))
    }

    /// The first observed tricode, or the sentinel.
    pub fn team_a(&self) -> &str {
        self.slots[0].as_deref().unwrap_or(UNKNOWN_TEAM)
    }

    /// The second observed tricode, or the sentinel.
    pub fn team_b(&self) -> &str {
        self.slots[1].as_deref().unwrap_or(UNKNOWN_TEAM)
    }

    /// Both tricodes in first-appearance order, sentinel-padded.
    pub fn teams(&self) -> [String; 2] {
        [self.team_a().to_string(), self.team_b().to_string()]
    }

    /// Returns true when both slots are filled.
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(|s| s.is_some())
    }

    /// The opposing tricode for one of the two known teams.
    ///
    /// Unknown or unseen codes map to themselves: attribution failures
    /// degrade to a no-op credit rather than aborting aggregation.
    pub fn opponent_of<'a>(&'a self, code: &'a str) -> &'a str {
        if self.slots[0].as_deref() == Some(code) {
            self.team_b()
        } else if self.slots[1].as_deref() == Some(code) {
            self.team_a()
        } else {
            code
        }
    }
}
