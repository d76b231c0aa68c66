//! Elodiff - match-statistics calculator
//!
//! This crate computes summary statistics for a series of games between
//! two players: the implied Elo rating difference, the winning fraction
//! and the Likelihood of Superiority (LOS), all derived from plain
//! win/loss/draw counts.

pub mod cli;
pub mod error;
pub mod report;
pub mod stats;
pub mod types;

// Re-export commonly used types and functions
pub use error::{Result, StatsError};
pub use stats::summarize;
pub use types::{MatchCounts, MatchSummary};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
