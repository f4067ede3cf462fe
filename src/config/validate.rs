//! Configuration validation.
//!
//! Validates configuration values and provides helpful error messages.

use crate::common::ConfigError;
use crate::config::types::Config;

/// Validate a configuration and return detailed errors.
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    let mut errors = Vec::new();

    // Validate Discord config
    if config.discord.token.is_empty() {
        errors.push("discord.token is required".to_string());
    }
    if config.discord.token == "YOUR_DISCORD_TOKEN_HERE" {
        errors.push("discord.token has not been configured (still using placeholder)".to_string());
    }

    // Validate Grok config
    if config.grok.api_key.is_empty() {
        errors.push("grok.api_key is required".to_string());
    }
    if config.grok.timeout_secs == 0 {
        errors.push("grok.timeout_secs must be non-zero".to_string());
    }

    // Validate leaderboard config
    let leaderboard = &config.leaderboard;
    if let Some(ref url) = leaderboard.url {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            errors.push(format!("leaderboard.url '{}' must be an http(s) URL", url));
        }
    }
    for (i, hour) in leaderboard.announce_hours_utc.iter().enumerate() {
        if *hour > 23 {
            errors.push(format!(
                "leaderboard.announce_hours_utc[{}] must be 0-23 (got {})",
                i, hour
            ));
        }
    }
    if leaderboard.expiry_hour_utc > 23 {
        errors.push(format!(
            "leaderboard.expiry_hour_utc must be 0-23 (got {})",
            leaderboard.expiry_hour_utc
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError {
            message: errors.join("\n"),
        })
    }
}
