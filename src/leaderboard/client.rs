//! HTTP client for the leaderboard service.

use std::time::Duration;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::Deserialize;
use tracing::debug;

use crate::common::LeaderboardError;
use crate::config::types::LeaderboardConfig;

/// One row of the leaderboard as returned by the service.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LeaderboardEntry {
    #[serde(rename = "playerName")]
    pub player_name: String,
    /// Kept as raw JSON so integer and fractional scores print as sent.
    pub score: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct LeaderboardPage {
    #[serde(default)]
    results: Vec<LeaderboardEntry>,
}

#[derive(Debug, Clone)]
pub struct LeaderboardClient {
    http: reqwest::Client,
    url: String,
    authorization: Option<String>,
}

impl LeaderboardClient {
    /// Build a client, or `None` when no leaderboard URL is configured.
    pub fn from_config(config: &LeaderboardConfig) -> Result<Option<Self>, LeaderboardError> {
        let Some(url) = config.url.clone() else {
            return Ok(None);
        };

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(15))
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        Ok(Some(Self {
            http,
            url,
            authorization: config.authorization.clone(),
        }))
    }

    /// Fetch the current standings, best first.
    pub async fn fetch(&self) -> Result<Vec<LeaderboardEntry>, LeaderboardError> {
        let mut request = self
            .http
            .get(&self.url)
            .header(CONTENT_TYPE, "application/json");
        if let Some(ref authorization) = self.authorization {
            request = request.header(AUTHORIZATION, format!("Basic {}", authorization));
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(LeaderboardError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let entries = parse_page(&body)?;
        debug!("Fetched {} leaderboard entries", entries.len());
        Ok(entries)
    }
}

fn parse_page(body: &str) -> Result<Vec<LeaderboardEntry>, LeaderboardError> {
    let page: LeaderboardPage = serde_json::from_str(body)?;
    Ok(page.results)
}
