//! Puzzle score share detection.
//!
//! Each matcher recognizes one daily puzzle's share card and turns it into a
//! canned reply. Matchers are independent and side-effect free; the order in
//! which they are tried lives in [`responder::ScoreResponder`].

pub mod connections;
pub mod responder;
pub mod strands;
pub mod wordle;

use std::fmt;

use fancy_regex::Regex;
use tracing::warn;

pub use connections::ConnectionsMatcher;
pub use responder::{ScoreReply, ScoreResponder};
pub use strands::StrandsMatcher;
pub use wordle::WordleMatcher;

/// The puzzle a share card belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameKind {
    Wordle,
    Connections,
    Strands,
}

impl GameKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Wordle => "wordle",
            Self::Connections => "connections",
            Self::Strands => "strands",
        }
    }
}

impl fmt::Display for GameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returns the first capture group of the first match in `text`.
///
/// A matcher error (backtrack limit exceeded on pathological input) counts
/// as no match.
fn first_capture<'t>(regex: &Regex, text: &'t str) -> Option<&'t str> {
    match regex.captures(text) {
        Ok(Some(caps)) => caps.get(1).map(|m| m.as_str()),
        Ok(None) => None,
        Err(e) => {
            warn!("Score pattern '{}' failed to run: {}", regex.as_str(), e);
            None
        }
    }
}
