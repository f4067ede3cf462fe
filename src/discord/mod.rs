//! Discord bot integration.
//!
//! Replies to score shares and mentions, serves the slash commands and posts
//! the scheduled leaderboard.

pub mod client;
pub mod commands;
pub mod embeds;
pub mod handler;

pub use client::DiscordBotBuilder;
pub use handler::BotServices;
