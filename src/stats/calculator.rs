//! Summary calculation
//!
//! This module turns raw win/loss/draw counts into the derived match
//! statistics. The computation is a single pass over four closed-form
//! formulas; degenerate inputs (no games, all draws, a 0% or 100% score)
//! are not guarded and propagate through as NaN or infinity.

use crate::stats::math::{elo_from_score, likelihood_of_superiority};
use crate::types::{MatchCounts, MatchSummary};

/// Compute the derived statistics for a set of match counts
pub fn summarize(counts: MatchCounts) -> MatchSummary {
    let games = counts.games();
    let winning_fraction = (counts.wins as f64 + 0.5 * counts.draws as f64) / games;

    MatchSummary {
        games,
        winning_fraction,
        elo_difference: elo_from_score(winning_fraction),
        los: likelihood_of_superiority(counts.wins, counts.losses),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_win() {
        let summary = summarize(MatchCounts::new(1, 0, 0));
        assert_eq!(summary.games, 1.0);
        assert_eq!(summary.winning_fraction, 1.0);
        assert_eq!(summary.elo_difference, f64::INFINITY);
        assert!((summary.los - 0.841_344_746).abs() < 1e-6);
    }

    #[test]
    fn test_single_loss_mirrors_single_win() {
        let summary = summarize(MatchCounts::new(0, 1, 0));
        assert_eq!(summary.winning_fraction, 0.0);
        assert_eq!(summary.elo_difference, f64::NEG_INFINITY);
        assert!((summary.los - 0.158_655_254).abs() < 1e-6);
    }

    #[test]
    fn test_single_draw() {
        let summary = summarize(MatchCounts::new(0, 0, 1));
        assert_eq!(summary.games, 1.0);
        assert_eq!(summary.winning_fraction, 0.5);
        assert_eq!(summary.elo_difference, 0.0);
        // LOS divides zero by zero when there are no decisive games
        assert!(summary.los.is_nan());
    }

    #[test]
    fn test_even_match() {
        let summary = summarize(MatchCounts::new(50, 50, 0));
        assert_eq!(summary.games, 100.0);
        assert_eq!(summary.winning_fraction, 0.5);
        assert_eq!(summary.elo_difference, 0.0);
        assert_eq!(summary.los, 0.5);
    }

    #[test]
    fn test_sixty_forty() {
        let summary = summarize(MatchCounts::new(60, 40, 0));
        assert_eq!(summary.games, 100.0);
        assert_eq!(summary.winning_fraction, 0.6);
        assert!((summary.elo_difference - 70.436_503_622_27).abs() < 1e-8);
        assert!((summary.los - 0.977_249_868).abs() < 1e-6);
    }

    #[test]
    fn test_no_games_is_all_nan() {
        let summary = summarize(MatchCounts::new(0, 0, 0));
        assert_eq!(summary.games, 0.0);
        assert!(summary.winning_fraction.is_nan());
        assert!(summary.elo_difference.is_nan());
        assert!(summary.los.is_nan());
    }

    #[test]
    fn test_draws_count_half() {
        let summary = summarize(MatchCounts::new(30, 30, 40));
        assert_eq!(summary.games, 100.0);
        assert_eq!(summary.winning_fraction, 0.5);
        assert_eq!(summary.elo_difference, 0.0);
        assert_eq!(summary.los, 0.5);
    }
}
