//! Command-line surface for the calculator
//!
//! The argument contract is deliberately strict about shape and lax about
//! content: exactly three positional counts must be present (anything
//! else is a usage error), but the counts themselves are parsed with
//! atoi-style permissiveness where malformed text silently becomes zero.
//! Help and version flags are disabled so that every wrongly shaped
//! invocation takes the usage-error path instead of a clap-generated
//! screen.

use crate::error::StatsError;
use crate::types::MatchCounts;
use clap::Parser;

/// Number of positional arguments the calculator expects
const EXPECTED_ARGS: usize = 3;

/// Literal spelling of the JSON output flag
const JSON_FLAG: &str = "--json";

/// Match-statistics calculator arguments
#[derive(Parser, Debug)]
#[command(
    name = "elodiff",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Args {
    /// Raw win, loss and draw counts, in that order
    #[arg(value_name = "COUNT", allow_hyphen_values = true, num_args = 0..)]
    pub counts: Vec<String>,

    /// Print the summary as a JSON object instead of the text report
    #[arg(long)]
    pub json: bool,
}

impl Args {
    /// Positional counts with the output-mode flag filtered out
    ///
    /// Once the hyphen-permissive positional starts consuming values, a
    /// trailing `--json` reaches it as a fourth "count"; recognizing the
    /// literal there keeps the flag position-independent.
    fn positionals(&self) -> Vec<&str> {
        self.counts
            .iter()
            .map(String::as_str)
            .filter(|value| *value != JSON_FLAG)
            .collect()
    }

    /// Whether the JSON output mode was requested, in either position
    pub fn json_output(&self) -> bool {
        self.json || self.counts.iter().any(|value| value == JSON_FLAG)
    }

    /// Extract the match counts, enforcing the three-argument shape
    pub fn match_counts(&self) -> Result<MatchCounts, StatsError> {
        let positionals = self.positionals();
        if positionals.len() != EXPECTED_ARGS {
            return Err(StatsError::WrongArgumentCount {
                expected: EXPECTED_ARGS,
                actual: positionals.len(),
            });
        }

        Ok(MatchCounts::new(
            parse_count(positionals[0]),
            parse_count(positionals[1]),
            parse_count(positionals[2]),
        ))
    }
}

/// Permissive integer parsing with atoi semantics
///
/// Skips leading ASCII whitespace, accepts an optional sign, then reads
/// the longest prefix of decimal digits. Anything else yields whatever
/// was read so far, so fully non-numeric text becomes zero rather than
/// an error. Accumulation saturates at the i64 bounds.
pub fn parse_count(text: &str) -> i64 {
    // ASCII whitespace only; atoi does not skip the wider Unicode set
    let trimmed = text.trim_start_matches(|c: char| c.is_ascii_whitespace());
    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let mut value: i64 = 0;
    for c in digits.chars() {
        let Some(digit) = c.to_digit(10) else {
            break;
        };
        value = value.saturating_mul(10);
        value = if negative {
            value.saturating_sub(digit as i64)
        } else {
            value.saturating_add(digit as i64)
        };
    }
    value
}

/// Usage message printed on a wrongly shaped invocation
pub fn usage(program: &str) -> String {
    format!("Wrong number of arguments.\n\nUsage:{program} <wins> <losses> <draws>\n")
}

/// Name the program was invoked as (argv[0])
pub fn program_name() -> String {
    std::env::args()
        .next()
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string())
}
