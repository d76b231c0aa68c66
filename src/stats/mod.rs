//! Match statistics computation
//!
//! This module provides the summary calculation and the numeric
//! primitives (error function, logistic Elo transforms) it is built on.

pub mod calculator;
pub mod math;

// Re-export commonly used functions
pub use calculator::summarize;
pub use math::{elo_from_score, likelihood_of_superiority, score_from_elo};
