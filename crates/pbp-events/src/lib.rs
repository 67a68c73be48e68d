//! Shared play-by-play types for the summarization pipeline.
//!
//! This crate contains pure data structures with no classification or
//! aggregation logic. It is a dependency for all other crates in the
//! workspace.

pub mod event;
pub mod raw;
pub mod summary;

#[cfg(any(test, feature = "test-fixtures"))]
pub mod fixtures;

// Re-export raw record types
pub use raw::{ActionHint, ParseHintError, RawEvent};

// Re-export normalized event types
pub use event::{EventKind, NormalizedEvent, TeamSide, UNKNOWN_PLAYER, UNKNOWN_TEAM};

// Re-export summary types
pub use summary::{GameSummary, ScoringRun, TeamStats};
