//! Game aggregation: stats, runs, and narrative.
//!
//! The recap crate consumes one game's ordered [`NormalizedEvent`]
//! sequence and folds it into a [`GameSummary`]: per-team box-score
//! counters, detected scoring runs, and a deterministic natural-language
//! recap.
//!
//! ```text
//! ┌──────────┐  [NormalizedEvent]   ┌───────┐   summary.json
//! │ pbp-core │ ───────────────────▶ │ recap │ ────────────────▶
//! └──────────┘                      └───────┘
//! ```
//!
//! Aggregation is a single forward pass and a pure function of its
//! input; the only fatal condition is an empty event sequence.
//!
//! # Modules
//!
//! - [`teams`]: two-slot team identity registry and opponent lookup
//! - [`aggregate`]: the stat-accumulation pass and [`Summarizer`]
//! - [`runs`]: scoring-run detection
//! - [`narrative`]: deterministic recap text
//! - [`config`]: TOML-backed thresholds and toggles
//! - [`output`]: summary file writing
//!
//! [`NormalizedEvent`]: pbp_events::NormalizedEvent
//! [`GameSummary`]: pbp_events::GameSummary

pub mod aggregate;
pub mod config;
pub mod narrative;
pub mod output;
pub mod runs;
pub mod teams;

pub use aggregate::Summarizer;
pub use config::{
    default_config_toml, ConfigError, NarrativeConfig, RecapConfig, RunConfig,
    TomlSerializeError,
};
pub use narrative::build_narrative;
pub use output::{read_summary, write_summary, OutputError};
pub use runs::detect_runs;
pub use teams::TeamRegistry;

use thiserror::Error;

/// Errors from aggregating a game.
///
/// Everything short of an empty input degrades into best-effort output
/// instead of erroring.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecapError {
    /// The input event sequence was empty; no partial summary exists.
    #[error("cannot summarize an empty game")]
    EmptyGame,
}
