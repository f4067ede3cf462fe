//! Leaderboard report formatting.

use chrono::{DateTime, Timelike, Utc};
use fancy_regex::Regex;

use crate::leaderboard::LeaderboardEntry;

/// Posted when the leaderboard cannot be fetched.
pub const LEADERBOARD_ERROR_TEXT: &str =
    "There is an error with the daily hamsterdle leaderboard. Golem, please fix it.";

const RANK_LABELS: [&str; 10] = [
    "🥇", "🥈", "🥉", "4th", "5th", "6th", "7th", "8th", "9th", "10th",
];

/// One placed player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Standing {
    pub rank: &'static str,
    pub name: String,
    pub score: String,
}

/// Top standings plus the time left in the daily round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardReport {
    pub standings: Vec<Standing>,
    pub countdown: String,
}

/// Turns raw leaderboard entries into a [`LeaderboardReport`].
#[derive(Debug, Clone)]
pub struct ReportBuilder {
    /// Platform account tags look like `Name#1234`.
    account_tag: Regex,
    expiry_hour: u32,
}

impl ReportBuilder {
    pub fn new(expiry_hour: u32) -> Result<Self, fancy_regex::Error> {
        Ok(Self {
            account_tag: Regex::new(r"#\d+")?,
            expiry_hour,
        })
    }

    /// Build the report for the top ten entries, or `None` if nobody has played.
    pub fn build(&self, entries: &[LeaderboardEntry], now: DateTime<Utc>) -> Option<LeaderboardReport> {
        if entries.is_empty() {
            return None;
        }

        let standings = entries
            .iter()
            .zip(RANK_LABELS)
            .map(|(entry, rank)| Standing {
                rank,
                name: self.account_tag.replace_all(&entry.player_name, "").into_owned(),
                score: entry.score.to_string(),
            })
            .collect();

        Some(LeaderboardReport {
            standings,
            countdown: countdown_text(now, self.expiry_hour),
        })
    }
}

/// Hours left until the board resets at `expiry_hour` UTC.
pub fn countdown_text(now: DateTime<Utc>, expiry_hour: u32) -> String {
    let hours = (expiry_hour + 24 - now.hour() % 24) % 24;
    if hours == 0 {
        "The daily hamsterdle is over! Congratulations to the winners!".to_string()
    } else {
        format!("{} hours until the daily hamsterdle ends!", hours)
    }
}
