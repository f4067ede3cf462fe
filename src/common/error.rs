//! Error types for the application.

use thiserror::Error;

/// Errors raised while assembling the bot's services at startup.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Leaderboard error: {0}")]
    Leaderboard(#[from] LeaderboardError),

    #[error("Invalid pattern: {0}")]
    Pattern(#[from] fancy_regex::Error),
}

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {message}")]
    IoError { path: String, message: String },

    #[error("Failed to parse config: {message}")]
    ParseError { message: String },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

/// Errors from the remote text-generation service.
#[derive(Debug, Error)]
pub enum GrokError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Service returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Completion contained no text")]
    EmptyCompletion,

    #[error("Request timed out after {seconds}s")]
    Timeout { seconds: u64 },
}

/// Errors from the external leaderboard API.
#[derive(Debug, Error)]
pub enum LeaderboardError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Leaderboard returned {status}")]
    Status { status: u16 },

    #[error("Malformed leaderboard payload: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Interaction log and prompt storage errors.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("Storage is disabled (no database configured)")]
    Disabled,
}
