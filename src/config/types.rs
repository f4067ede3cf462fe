//! Configuration type definitions.

use serde::Deserialize;

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub discord: DiscordConfig,
    pub grok: GrokConfig,
    pub scores: ScoresConfig,
    pub leaderboard: LeaderboardConfig,
    pub gifs: GifsConfig,
    pub database: DatabaseConfig,
}

/// Discord bot configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DiscordConfig {
    pub token: String,
    /// Name of the channel that receives scheduled leaderboard posts.
    pub announce_channel: String,
}

impl Default for DiscordConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            announce_channel: "g✱mer-safe-space".to_string(),
        }
    }
}

/// xAI Grok API settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GrokConfig {
    pub api_key: String,
    pub base_url: String,
    /// Model answering mentions.
    pub chat_model: String,
    /// Model writing Wordle remarks.
    pub wordle_model: String,
    pub timeout_secs: u64,
}

impl Default for GrokConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: "https://api.x.ai/v1".to_string(),
            chat_model: "grok-4-1-fast-reasoning".to_string(),
            wordle_model: "grok-3-mini".to_string(),
            timeout_secs: 30,
        }
    }
}

/// Score reply settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ScoresConfig {
    /// Generate Wordle replies with Grok instead of the canned table.
    pub wordle_ai_enabled: bool,
}

/// Hamsterdle leaderboard polling. Disabled while `url` is unset.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LeaderboardConfig {
    pub url: Option<String>,
    /// Value sent as `Authorization: Basic <authorization>`.
    pub authorization: Option<String>,
    /// UTC hours at which the leaderboard is posted to the announce channel.
    pub announce_hours_utc: Vec<u32>,
    /// UTC hour at which the daily board resets.
    pub expiry_hour_utc: u32,
}

impl Default for LeaderboardConfig {
    fn default() -> Self {
        Self {
            url: None,
            authorization: None,
            announce_hours_utc: vec![1, 7],
            expiry_hour_utc: 7,
        }
    }
}

/// Gif library location.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GifsConfig {
    pub file: String,
}

impl Default for GifsConfig {
    fn default() -> Self {
        Self {
            file: "gifs.json".to_string(),
        }
    }
}

/// Interaction log database. Disabled while `url` is unset.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// SQLite URL, e.g. `sqlite://scorekeeper.db` or `sqlite::memory:`.
    pub url: Option<String>,
}
