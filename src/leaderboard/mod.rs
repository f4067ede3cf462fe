//! Hamsterdle daily leaderboard.
//!
//! Fetches the top scores from the leaderboard service and turns them into a
//! [`LeaderboardReport`] for posting, plus the schedule for automatic posts.

pub mod client;
pub mod report;
pub mod schedule;

pub use client::{LeaderboardClient, LeaderboardEntry};
pub use report::{LeaderboardReport, ReportBuilder, LEADERBOARD_ERROR_TEXT};
pub use schedule::next_announcement;

use chrono::{DateTime, Utc};
use tracing::error;

use crate::common::AppError;
use crate::config::types::LeaderboardConfig;

/// What to post after polling the leaderboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LeaderboardPost {
    Standings(LeaderboardReport),
    /// Nobody has played yet; post nothing.
    Empty,
    /// The service could not be reached or understood.
    Unavailable,
}

impl LeaderboardPost {
    /// Plain-text message accompanying the post, if any.
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Standings(report) => Some(&report.countdown),
            Self::Empty => None,
            Self::Unavailable => Some(LEADERBOARD_ERROR_TEXT),
        }
    }
}

/// Leaderboard client plus report formatting and schedule.
#[derive(Debug, Clone)]
pub struct LeaderboardService {
    client: LeaderboardClient,
    builder: ReportBuilder,
    announce_hours_utc: Vec<u32>,
}

impl LeaderboardService {
    /// Build the service, or `None` when no leaderboard URL is configured.
    pub fn from_config(config: &LeaderboardConfig) -> Result<Option<Self>, AppError> {
        let Some(client) = LeaderboardClient::from_config(config)? else {
            return Ok(None);
        };

        Ok(Some(Self {
            client,
            builder: ReportBuilder::new(config.expiry_hour_utc)?,
            announce_hours_utc: config.announce_hours_utc.clone(),
        }))
    }

    /// Poll the leaderboard and decide what to post. Never fails.
    pub async fn poll(&self, now: DateTime<Utc>) -> LeaderboardPost {
        match self.client.fetch().await {
            Ok(entries) => match self.builder.build(&entries, now) {
                Some(report) => LeaderboardPost::Standings(report),
                None => LeaderboardPost::Empty,
            },
            Err(e) => {
                error!("Failed to fetch leaderboard: {}", e);
                LeaderboardPost::Unavailable
            }
        }
    }

    /// When the next scheduled post is due after `after`.
    pub fn next_announcement(&self, after: DateTime<Utc>) -> Option<DateTime<Utc>> {
        next_announcement(after, &self.announce_hours_utc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_text() {
        let report = LeaderboardReport {
            standings: Vec::new(),
            countdown: "3 hours until the daily hamsterdle ends!".to_string(),
        };
        assert_eq!(
            LeaderboardPost::Standings(report).text(),
            Some("3 hours until the daily hamsterdle ends!")
        );
        assert_eq!(LeaderboardPost::Empty.text(), None);
        assert_eq!(LeaderboardPost::Unavailable.text(), Some(LEADERBOARD_ERROR_TEXT));
    }

    #[test]
    fn test_disabled_without_url() {
        let service = LeaderboardService::from_config(&LeaderboardConfig::default()).unwrap();
        assert!(service.is_none());
    }

    #[tokio::test]
    async fn test_unreachable_service_is_unavailable() {
        let config = LeaderboardConfig {
            url: Some("http://127.0.0.1:1/leaderboard".to_string()),
            ..LeaderboardConfig::default()
        };
        let service = LeaderboardService::from_config(&config).unwrap().unwrap();
        assert_eq!(service.poll(Utc::now()).await, LeaderboardPost::Unavailable);
    }
}
