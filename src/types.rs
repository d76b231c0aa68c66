//! Common types used throughout the calculator

use serde::{Deserialize, Serialize};

/// Raw game counts for one side of a match series
///
/// Counts are signed and unvalidated: the reference behavior accepts any
/// integers, including zero or negative, and lets the downstream float
/// arithmetic produce NaN or infinity for the degenerate combinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchCounts {
    pub wins: i64,
    pub losses: i64,
    pub draws: i64,
}

impl MatchCounts {
    /// Create a new set of match counts
    pub fn new(wins: i64, losses: i64, draws: i64) -> Self {
        Self {
            wins,
            losses,
            draws,
        }
    }

    /// Total number of games, as the floating-point value the formulas use
    pub fn games(&self) -> f64 {
        self.wins as f64 + self.losses as f64 + self.draws as f64
    }

    /// Decisive games only (draws excluded), the LOS denominator
    pub fn decisive_games(&self) -> f64 {
        self.wins as f64 + self.losses as f64
    }
}

/// Derived statistics for a match series
///
/// All fields are plain doubles; degenerate inputs surface here as NaN or
/// infinity rather than as errors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchSummary {
    /// Total number of games played
    pub games: f64,
    /// Points won divided by games, a draw counting half
    pub winning_fraction: f64,
    /// Rating gap implied by the winning fraction (logistic model)
    pub elo_difference: f64,
    /// Likelihood of Superiority
    pub los: f64,
}
