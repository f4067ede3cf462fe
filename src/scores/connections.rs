//! Connections share detection.
//!
//! A share is the header (`Connections`, optional `Puzzle`, optional `#`,
//! puzzle number) followed by one to six rows of four colored squares. Each
//! row is one guess; a solved group shows as a row of a single color.

use fancy_regex::Regex;

use super::first_capture;

/// Header plus up to six whitespace-separated rows of four category squares.
/// The header word must be spelled exactly.
const CONNECTIONS_PATTERN: &str =
    r"(?i)connections\s*(?:puzzle\s*)?#?\d+\s*((?:[🟨🟩🟦🟪]{4}\s*){1,6})";

/// Most guesses a player gets before the puzzle ends.
const MAX_GUESSES: usize = 6;

/// Result of a Connections share.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionsOutcome {
    Solved,
    Lost,
}

impl ConnectionsOutcome {
    /// Classify from the rows of a share, one four-square string per guess.
    ///
    /// Only a share that used every guess and whose final guess still mixes
    /// colors is a loss.
    pub fn from_rows(rows: &[&str]) -> Self {
        match rows.last() {
            Some(last) if rows.len() == MAX_GUESSES && !is_uniform(last) => Self::Lost,
            _ => Self::Solved,
        }
    }

    pub fn response(&self) -> &'static str {
        match self {
            Self::Solved => "Nice job solving the Connections!",
            Self::Lost => "You lost! Better luck tomorrow!",
        }
    }
}

fn is_uniform(row: &str) -> bool {
    let mut squares = row.chars();
    match squares.next() {
        Some(first) => squares.all(|c| c == first),
        None => true,
    }
}

/// Compiled Connections share pattern.
#[derive(Debug, Clone)]
pub struct ConnectionsMatcher {
    pattern: Regex,
}

impl ConnectionsMatcher {
    pub fn new() -> Result<Self, fancy_regex::Error> {
        Ok(Self {
            pattern: Regex::new(CONNECTIONS_PATTERN)?,
        })
    }

    pub fn classify(&self, text: &str) -> Option<ConnectionsOutcome> {
        let grid = first_capture(&self.pattern, text)?;
        let rows: Vec<&str> = grid.split_whitespace().collect();
        Some(ConnectionsOutcome::from_rows(&rows))
    }

    pub fn respond(&self, text: &str) -> Option<&'static str> {
        self.classify(text).map(|outcome| outcome.response())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIN: &str = "Nice job solving the Connections!";
    const LOSS: &str = "You lost! Better luck tomorrow!";

    fn matcher() -> ConnectionsMatcher {
        ConnectionsMatcher::new().unwrap()
    }

    #[test]
    fn test_clean_four_row_solve() {
        let m = matcher();
        let share = "Connections\nPuzzle #773\n🟦🟦🟦🟦\n🟩🟩🟩🟩\n🟨🟨🟨🟨\n🟪🟪🟪🟪";
        assert_eq!(m.respond(share), Some(WIN));
    }

    #[test]
    fn test_solve_with_one_mistake() {
        let m = matcher();
        let share = "Connections\nPuzzle #775\n🟩🟦🟦🟦\n🟦🟦🟦🟦\n🟨🟨🟨🟨\n🟩🟩🟩🟩\n🟪🟪🟪🟪";
        assert_eq!(m.respond(share), Some(WIN));
    }

    #[test]
    fn test_header_variants() {
        let m = matcher();
        let rows = "🟨🟨🟨🟨\n🟩🟩🟩🟩\n🟦🟦🟦🟦\n🟪🟪🟪🟪";
        for header in ["connections #456", "CONNECTIONS 456", "Connections puzzle 789", "Connections Puzzle #1"] {
            let share = format!("{}\n{}", header, rows);
            assert_eq!(m.respond(&share), Some(WIN), "{}", header);
        }
    }

    #[test]
    fn test_rows_on_one_line() {
        let m = matcher();
        let share = "Connections puzzle 789 🟨🟨🟨🟨 🟩🟩🟩🟩 🟦🟦🟦🟦 🟪🟪🟪🟪";
        assert_eq!(m.respond(share), Some(WIN));
    }

    #[test]
    fn test_six_rows_mixed_last_row_is_loss() {
        let m = matcher();
        let share = "Connections #100\n🟨🟨🟨🟨\n🟩🟩🟩🟩\n🟦🟦🟦🟦\n🟪🟪🟪🟨\n🟩🟦🟪🟨\n🟨🟩🟦🟪";
        assert_eq!(m.respond(share), Some(LOSS));
    }

    #[test]
    fn test_six_rows_uniform_last_row_is_win() {
        let m = matcher();
        let share = "Connections #101\n🟨🟩🟨🟨\n🟨🟨🟨🟨\n🟩🟦🟩🟩\n🟩🟩🟩🟩\n🟦🟦🟦🟦\n🟪🟪🟪🟪";
        assert_eq!(m.respond(share), Some(WIN));
    }

    #[test]
    fn test_misspelled_header_is_rejected() {
        let m = matcher();
        let share = "Connecions #500\n🟨🟨🟨🟨\n🟩🟩🟩🟩\n🟦🟪🟨🟩\n🟪🟦🟨🟩\n🟨🟩🟦🟪\n🟪🟨🟩🟦";
        assert_eq!(m.respond(share), None);
    }

    #[test]
    fn test_non_matching_messages() {
        let m = matcher();
        for text in [
            "Just talking about connections",
            "Random text with emojis 🟨🟩",
            "🟨🟨🟨🟨\n🟩🟩🟩🟩\n🟦🟦🟦🟦\n🟪🟪🟪🟪",
            "Connections #123\n🟨🟨🟨\n🟩🟩🟩🟩",
            "Connections #123",
        ] {
            assert_eq!(m.respond(text), None, "should not match: {}", text);
        }
    }

    #[test]
    fn test_from_rows() {
        let mixed = ["🟨🟩🟦🟪"; 6];
        assert_eq!(ConnectionsOutcome::from_rows(&mixed), ConnectionsOutcome::Lost);
        assert_eq!(ConnectionsOutcome::from_rows(&mixed[..5]), ConnectionsOutcome::Solved);
        assert_eq!(ConnectionsOutcome::from_rows(&[]), ConnectionsOutcome::Solved);
    }
}
