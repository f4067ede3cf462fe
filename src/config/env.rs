//! Environment variable overrides for configuration.
//!
//! Supports overriding config values with environment variables:
//! - `SCOREKEEPER_DISCORD_TOKEN` - Discord bot token
//! - `SCOREKEEPER_XAI_API_KEY` - xAI API key
//! - `SCOREKEEPER_WORDLE_AI_ENABLED` - `true` to generate Wordle replies
//! - `SCOREKEEPER_UNITY_URL` - Hamsterdle leaderboard URL
//! - `SCOREKEEPER_AUTHORIZATION_HEADER` - Basic credentials for the leaderboard
//! - `SCOREKEEPER_DATABASE_URL` - SQLite URL for the interaction log
//! - `SCOREKEEPER_GIFS_FILE` - Path to the gif library

use std::env;

use crate::config::types::Config;

/// Environment variable prefix for all config overrides.
const ENV_PREFIX: &str = "SCOREKEEPER";

/// Apply environment variable overrides to a config.
///
/// This allows secrets like tokens and API keys to be provided via
/// environment variables instead of the config file.
pub fn apply_env_overrides(config: Config) -> Config {
    apply_overrides(config, |name| env::var(name).ok())
}

/// Apply overrides from an arbitrary variable lookup.
pub fn apply_overrides(mut config: Config, lookup: impl Fn(&str) -> Option<String>) -> Config {
    let var = |name: &str| lookup(&format!("{}_{}", ENV_PREFIX, name));

    if let Some(token) = var("DISCORD_TOKEN") {
        config.discord.token = token;
    }
    if let Some(key) = var("XAI_API_KEY") {
        config.grok.api_key = key;
    }
    if let Some(enabled) = var("WORDLE_AI_ENABLED") {
        config.scores.wordle_ai_enabled = enabled == "true";
    }
    if let Some(url) = var("UNITY_URL") {
        config.leaderboard.url = Some(url);
    }
    if let Some(authorization) = var("AUTHORIZATION_HEADER") {
        config.leaderboard.authorization = Some(authorization);
    }
    if let Some(url) = var("DATABASE_URL") {
        config.database.url = Some(url);
    }
    if let Some(file) = var("GIFS_FILE") {
        config.gifs.file = file;
    }

    config
}

/// Get the config file path from environment or use default.
///
/// Checks `SCOREKEEPER_CONFIG` environment variable, otherwise returns "scorekeeper.conf".
pub fn get_config_path() -> String {
    env::var(format!("{}_CONFIG", ENV_PREFIX)).unwrap_or_else(|_| "scorekeeper.conf".to_string())
}
