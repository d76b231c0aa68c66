//! Plain-text rendering of a match summary
//!
//! Output is four fixed lines. Values print in Rust's shortest
//! round-trip float format; the Elo difference additionally carries an
//! explicit leading sign so a reader can tell at a glance which side the
//! gap favors. NaN and infinity print as values, not as errors.

use crate::types::MatchSummary;

/// Render the four-line text report
pub fn render(summary: &MatchSummary) -> String {
    format!(
        "Number of games: {}\n\
         Winning fraction: {}\n\
         Elo difference: {:+}\n\
         LOS: {}\n",
        summary.games, summary.winning_fraction, summary.elo_difference, summary.los
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::summarize;
    use crate::types::MatchCounts;

    #[test]
    fn test_render_single_draw() {
        let report = render(&summarize(MatchCounts::new(0, 0, 1)));
        assert_eq!(
            report,
            "Number of games: 1\n\
             Winning fraction: 0.5\n\
             Elo difference: -0\n\
             LOS: NaN\n"
        );
    }

    #[test]
    fn test_render_even_match() {
        let report = render(&summarize(MatchCounts::new(50, 50, 0)));
        assert_eq!(
            report,
            "Number of games: 100\n\
             Winning fraction: 0.5\n\
             Elo difference: -0\n\
             LOS: 0.5\n"
        );
    }

    #[test]
    fn test_render_whitewash() {
        let report = render(&summarize(MatchCounts::new(2, 0, 0)));
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines[0], "Number of games: 2");
        assert_eq!(lines[1], "Winning fraction: 1");
        assert_eq!(lines[2], "Elo difference: +inf");
        assert!(lines[3].starts_with("LOS: 0.9"));
    }

    #[test]
    fn test_render_signs_follow_the_favorite() {
        let ahead = render(&summarize(MatchCounts::new(60, 40, 0)));
        let behind = render(&summarize(MatchCounts::new(40, 60, 0)));
        assert!(ahead.contains("Elo difference: +70.4"));
        assert!(behind.contains("Elo difference: -70.4"));
    }
}
