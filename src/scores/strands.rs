//! Strands share detection.
//!
//! A share is `Strands #<n>`, the quoted theme hint, then lines of 🔵 (theme
//! word) and 🟡 (spangram) circles. A complete solve shows exactly one
//! spangram; there is no losing state, so anything else gets no reply.

use fancy_regex::Regex;

use super::first_capture;

/// Marks the spangram in the circle grid.
const SPANGRAM: char = '🟡';

/// Header, hint in straight or typographic quotes (either style on either
/// side), then one or more lines of circles.
const STRANDS_PATTERN: &str =
    r#"(?i)strands\s*#?\d+\s*["“”][^"“”]+["“”]\s*((?:[🔵🟡]+\s*)+)"#;

/// Result of a Strands share.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrandsOutcome {
    Solved,
    /// Zero or several spangrams: not a genuine complete share.
    Incomplete,
}

impl StrandsOutcome {
    pub fn from_grid(grid: &str) -> Self {
        match grid.chars().filter(|&c| c == SPANGRAM).count() {
            1 => Self::Solved,
            _ => Self::Incomplete,
        }
    }

    pub fn response(&self) -> Option<&'static str> {
        match self {
            Self::Solved => Some("Nice job solving today's strands!"),
            Self::Incomplete => None,
        }
    }
}

/// Compiled Strands share pattern.
#[derive(Debug, Clone)]
pub struct StrandsMatcher {
    pattern: Regex,
}

impl StrandsMatcher {
    pub fn new() -> Result<Self, fancy_regex::Error> {
        Ok(Self {
            pattern: Regex::new(STRANDS_PATTERN)?,
        })
    }

    pub fn classify(&self, text: &str) -> Option<StrandsOutcome> {
        first_capture(&self.pattern, text).map(StrandsOutcome::from_grid)
    }

    pub fn respond(&self, text: &str) -> Option<&'static str> {
        self.classify(text).and_then(|outcome| outcome.response())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIN: &str = "Nice job solving today's strands!";

    fn matcher() -> StrandsMatcher {
        StrandsMatcher::new().unwrap()
    }

    #[test]
    fn test_typographic_quotes() {
        let m = matcher();
        let share = "Strands #507\n“Chips in”\n🔵🔵🔵🟡\n🔵🔵🔵";
        assert_eq!(m.respond(share), Some(WIN));
    }

    #[test]
    fn test_straight_and_mixed_quotes() {
        let m = matcher();
        assert_eq!(m.respond("strands 12 \"Go fish\" 🔵🟡🔵"), Some(WIN));
        assert_eq!(m.respond("Strands #12\n“Go fish\"\n🔵🔵\n🟡🔵"), Some(WIN));
        assert_eq!(m.respond("STRANDS #12\n\"Go fish”\n🟡\n🔵🔵🔵"), Some(WIN));
    }

    #[test]
    fn test_spangram_on_a_later_line() {
        let m = matcher();
        let share = "Strands #600\n“Hot stuff”\n🔵🔵🔵🔵\n🔵🔵🔵\n🔵🟡🔵";
        assert_eq!(m.classify(share), Some(StrandsOutcome::Solved));
    }

    #[test]
    fn test_no_spangram_gets_no_reply() {
        let m = matcher();
        let share = "Strands #507\n“Chips in”\n🔵🔵🔵🔵\n🔵🔵🔵";
        assert_eq!(m.classify(share), Some(StrandsOutcome::Incomplete));
        assert_eq!(m.respond(share), None);
    }

    #[test]
    fn test_two_spangrams_get_no_reply() {
        let m = matcher();
        let share = "Strands #507\n“Chips in”\n🔵🟡🔵🔵\n🔵🔵🟡";
        assert_eq!(m.respond(share), None);
    }

    #[test]
    fn test_non_matching_messages() {
        let m = matcher();
        for text in [
            "I love strands",
            "Strands #507\n🔵🔵🔵🟡",
            "Strands #507\n“”\n🔵🔵🔵🟡",
            "“Chips in”\n🔵🔵🔵🟡",
        ] {
            assert_eq!(m.classify(text), None, "should not match: {}", text);
        }
    }
}
