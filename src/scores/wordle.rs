//! Wordle share detection.
//!
//! Recognizes `Wordle <puzzle> <grade>/6` anywhere in a message, e.g.
//! `Wordle 1,497 5/6*` followed by the emoji grid. Only the first share in a
//! message counts.

use fancy_regex::Regex;

use super::first_capture;

/// Game name, puzzle number (optionally with one thousands separator) and a
/// grade peeked at through the `/6` suffix so trailing decoration such as a
/// hard-mode `*` does not affect the match.
const WORDLE_PATTERN: &str = r"(?i)wordle\s+\d+(?:,\d+)?\s+([0-6X])(?=/6\*?)";

/// Reply for a grade that fits the share grammar but is not a real result.
const INVALID_GRADE_REPLY: &str = "Are you sure that's a valid score?";

/// Result of a Wordle share.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordleOutcome {
    /// Solved in the given number of guesses (1..=6).
    Solved(u8),
    /// `X/6`: not solved in six guesses.
    Lost,
    /// Grade fits the grammar but is out of range (`0/6`).
    Invalid,
}

impl WordleOutcome {
    /// Map a captured grade token to an outcome.
    pub fn from_grade(grade: &str) -> Self {
        match grade {
            "X" | "x" => Self::Lost,
            _ => match grade.parse::<u8>() {
                Ok(guesses @ 1..=6) => Self::Solved(guesses),
                _ => Self::Invalid,
            },
        }
    }

    /// The canned reply for this outcome.
    pub fn response(&self) -> &'static str {
        match self {
            Self::Lost => "You lost! ;(",
            Self::Solved(1) => "You totally looked up the answer!",
            Self::Solved(2) => "Yeeeesh what a score!",
            Self::Solved(3) => "Good score!",
            Self::Solved(4) => "Decent score!",
            Self::Solved(5) => "I think we can do better tomorrow!",
            Self::Solved(6) => "That was a close one!",
            // from_grade never builds Solved outside 1..=6
            Self::Solved(_) | Self::Invalid => INVALID_GRADE_REPLY,
        }
    }
}

/// Compiled Wordle share pattern.
#[derive(Debug, Clone)]
pub struct WordleMatcher {
    pattern: Regex,
}

impl WordleMatcher {
    pub fn new() -> Result<Self, fancy_regex::Error> {
        Ok(Self {
            pattern: Regex::new(WORDLE_PATTERN)?,
        })
    }

    /// Classify the first Wordle share in `text`, if any.
    pub fn classify(&self, text: &str) -> Option<WordleOutcome> {
        first_capture(&self.pattern, text).map(WordleOutcome::from_grade)
    }

    /// Canned reply for the first Wordle share in `text`, if any.
    pub fn respond(&self, text: &str) -> Option<&'static str> {
        self.classify(text).map(|outcome| outcome.response())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher() -> WordleMatcher {
        WordleMatcher::new().unwrap()
    }

    #[test]
    fn test_every_grade_maps_to_its_reply() {
        let m = matcher();
        let cases = [
            ("1", "You totally looked up the answer!"),
            ("2", "Yeeeesh what a score!"),
            ("3", "Good score!"),
            ("4", "Decent score!"),
            ("5", "I think we can do better tomorrow!"),
            ("6", "That was a close one!"),
            ("X", "You lost! ;("),
        ];
        for number in ["123", "1,025", "1500"] {
            for (grade, expected) in cases {
                let text = format!("Wordle {} {}/6", number, grade);
                assert_eq!(m.respond(&text), Some(expected), "{}", text);
            }
        }
    }

    #[test]
    fn test_game_name_is_case_insensitive() {
        let m = matcher();
        assert_eq!(m.respond("wordle 123 X/6"), Some("You lost! ;("));
        assert_eq!(m.respond("WORDLE 456 1/6*"), Some("You totally looked up the answer!"));
        assert_eq!(m.respond("wOrDlE 100 2/6"), Some("Yeeeesh what a score!"));
    }

    #[test]
    fn test_hard_mode_star_does_not_change_result() {
        let m = matcher();
        assert_eq!(m.respond("Wordle 1500 1/6*"), m.respond("Wordle 1500 1/6"));
        assert_eq!(m.respond("wordle 999 X/6*"), Some("You lost! ;("));
    }

    #[test]
    fn test_full_share_with_grid() {
        let m = matcher();
        let share = "Wordle 1,497 5/6*\n\n⬛⬛🟨⬛⬛\n⬛⬛🟨🟩🟩\n🟩⬛⬛🟩🟩\n🟩🟩⬛🟩🟩\n🟩🟩🟩🟩🟩";
        assert_eq!(m.respond(share), Some("I think we can do better tomorrow!"));

        let share = "Wordle 1,496 4/6*\n\n⬛⬛⬛⬛🟩\n⬛⬛🟩⬛🟩\n⬛⬛🟩⬛🟩\n🟩🟩🟩🟩🟩";
        assert_eq!(m.respond(share), Some("Decent score!"));
    }

    #[test]
    fn test_only_first_share_counts() {
        let m = matcher();
        let text = "Wordle 800 2/6 and yesterday Wordle 799 X/6";
        assert_eq!(m.classify(text), Some(WordleOutcome::Solved(2)));
    }

    #[test]
    fn test_share_embedded_in_chatter() {
        let m = matcher();
        let text = "finally!! Wordle 1,200 3/6 took forever";
        assert_eq!(m.respond(text), Some("Good score!"));
    }

    #[test]
    fn test_non_matching_messages() {
        let m = matcher();
        for text in [
            "Wordle 123 7/6",
            "wordle 123",
            "Just talking about wordle",
            "Wordle 123 3/7",
            "Something else 3/6",
            "Wordle 123 A/6",
            "⬛⬛🟨⬛⬛\n⬛⬛🟨🟩🟩\n🟩⬛⬛🟩🟩",
            "",
        ] {
            assert_eq!(m.respond(text), None, "should not match: {}", text);
        }
    }

    #[test]
    fn test_zero_grade_is_invalid_not_silent() {
        let m = matcher();
        assert_eq!(m.classify("Wordle 123 0/6"), Some(WordleOutcome::Invalid));
        assert_eq!(m.respond("Wordle 123 0/6"), Some(INVALID_GRADE_REPLY));
    }

    #[test]
    fn test_from_grade() {
        assert_eq!(WordleOutcome::from_grade("x"), WordleOutcome::Lost);
        assert_eq!(WordleOutcome::from_grade("4"), WordleOutcome::Solved(4));
        assert_eq!(WordleOutcome::from_grade("0"), WordleOutcome::Invalid);
        assert_eq!(WordleOutcome::from_grade("9"), WordleOutcome::Invalid);
    }

    #[test]
    fn test_long_input_terminates() {
        let m = matcher();
        let noise = "wordle 1".repeat(20_000);
        assert_eq!(m.respond(&noise), None);
    }
}
