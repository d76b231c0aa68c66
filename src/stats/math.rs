//! Numeric primitives for the match statistics
//!
//! The error function is not provided by the standard library; the
//! rational approximation below (Abramowitz & Stegun 7.1.26) is accurate
//! to 1.5e-7 over the whole real line, which is far below anything the
//! printed statistics can resolve.

use std::f64::consts::LN_10;

const ERF_P: f64 = 0.327_591_1;
const ERF_A1: f64 = 0.254_829_592;
const ERF_A2: f64 = -0.284_496_736;
const ERF_A3: f64 = 1.421_413_741;
const ERF_A4: f64 = -1.453_152_027;
const ERF_A5: f64 = 1.061_405_429;

/// Error function, odd in `x`, with `erf(±∞) = ±1` and NaN propagation
pub fn erf(x: f64) -> f64 {
    // The approximation is exact at the limits but not at zero; the
    // early return keeps erf(0) == 0 and preserves the sign of -0.0.
    if x == 0.0 {
        return x;
    }
    if x < 0.0 {
        return -erf(-x);
    }
    let t = 1.0 / (1.0 + ERF_P * x);
    let poly = t * (ERF_A1 + t * (ERF_A2 + t * (ERF_A3 + t * (ERF_A4 + t * ERF_A5))));
    1.0 - poly * (-x * x).exp()
}

/// Rating gap implied by a score under the logistic model
///
/// A score of 0.5 maps to zero, scores above 0.5 to positive gaps. The
/// degenerate scores are not guarded: 1.0 yields +∞, 0.0 yields -∞ and
/// NaN propagates, exactly as the IEEE arithmetic dictates.
pub fn elo_from_score(score: f64) -> f64 {
    -(1.0 / score - 1.0).ln() * 400.0 / LN_10
}

/// Expected score for a player rated `elo` points above the opponent
///
/// Inverse of [`elo_from_score`] on the open unit interval.
pub fn score_from_elo(elo: f64) -> f64 {
    1.0 / (1.0 + 10.0_f64.powf(-elo / 400.0))
}

/// Likelihood of Superiority under a normal approximation
///
/// Probability that the side with more wins is truly stronger, given the
/// decisive games only. All-draw series divide zero by zero and come out
/// as NaN; that is the reference behavior, not a bug.
pub fn likelihood_of_superiority(wins: i64, losses: i64) -> f64 {
    let decisive = wins as f64 + losses as f64;
    let margin = wins as f64 - losses as f64;
    0.5 + 0.5 * erf(margin / (2.0 * decisive).sqrt())
}
