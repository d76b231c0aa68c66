//! Error types for the statistics calculator
//!
//! This module defines all error types using anyhow for consistent error
//! handling throughout the crate. Degenerate arithmetic (zero games,
//! all-draw matches) is deliberately not an error: it propagates through
//! the formulas as NaN or infinity and is printed as such.

/// Result type alias for convenience
pub type Result<T> = anyhow::Result<T>;

/// Custom error types for the explicitly handled failure modes
#[derive(Debug, thiserror::Error)]
pub enum StatsError {
    #[error("wrong number of arguments: expected {expected}, got {actual}")]
    WrongArgumentCount { expected: usize, actual: usize },
}
