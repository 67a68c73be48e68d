//! Per-Game Team Resolution
//!
//! Source rows carry the team tricode inconsistently: some rows name it
//! explicitly, others leave it blank. [`TeamResolver`] is the explicit
//! per-game state for filling those gaps: it remembers the most recently
//! observed tricode for each bench and answers with it when a row omits
//! the code. One resolver per game; passing it across games would leak
//! identities.

use pbp_events::{TeamSide, UNKNOWN_TEAM};

/// Tracks the most recently observed team tricode per bench within one
/// game.
#[derive(Debug, Clone, Default)]
pub struct TeamResolver {
    home: Option<String>,
    away: Option<String>,
}

impl TeamResolver {
    /// Creates an empty resolver for a new game.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves the tricode for a record.
    ///
    /// An explicit non-empty tricode is authoritative and also updates
    /// the bench memory for `side`. Without one, the most recently
    /// observed tricode for that bench is used, and [`UNKNOWN_TEAM`]
    /// when nothing has been observed yet. `Neutral`/`Unknown` sides
    /// have no bench memory and resolve straight to the sentinel.
    pub fn resolve(&mut self, side: TeamSide, explicit: Option<&str>) -> String {
        if let Some(code) = explicit {
            self.observe(side, code);
            return code.to_string();
        }

        let remembered = match side {
            TeamSide::Home => self.home.as_deref(),
            TeamSide::Away => self.away.as_deref(),
            TeamSide::Neutral | TeamSide::Unknown => None,
        };

        match remembered {
            Some(code) => code.to_string(),
            None => {
                tracing::debug!(?side, "no tricode observed for side, using sentinel");
                UNKNOWN_TEAM.to_string()
            }
        }
    }

    fn observe(&mut self, side: TeamSide, code: &str) {
        match side {
            TeamSide::Home => self.home = Some(code.to_string()),
            TeamSide::Away => self.away = Some(code.to_string()),
            TeamSide::Neutral | TeamSide::Unknown => {}
        }
    }

    /// The most recently observed home tricode, if any.
    pub fn home_team(&self) -> Option<&str> {
        self.home.as_deref()
    }

    /// The most recently observed away tricode, if any.
    pub fn away_team(&self) -> Option<&str> {
        self.away.as_deref()
    }
}
