//! Scorekeeper - Discord bot for daily puzzle scores
//!
//! Replies to shared Wordle, Connections and Strands results, answers
//! mentions through Grok, and posts the daily Hamsterdle leaderboard.

mod common;
mod config;
mod discord;
mod gifs;
mod grok;
mod leaderboard;
mod scores;
mod storage;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tokio::signal;
use tokio::sync::watch;
use tracing::{error, info, warn};

use config::{env::get_config_path, load_and_validate};
use discord::{BotServices, DiscordBotBuilder};
use gifs::GifLibrary;
use grok::{GrokClient, TextGenerator};
use leaderboard::LeaderboardService;
use scores::ScoreResponder;
use storage::Storage;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!("Scorekeeper v{} starting...", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config_path = get_config_path();
    info!("Loading configuration from {}...", config_path);

    let config = load_and_validate(&config_path).map_err(|e| {
        error!("Failed to load configuration: {}", e);
        error!("Please ensure {} exists or the SCOREKEEPER_ environment variables are set.", config_path);
        e
    })?;

    info!("Configuration loaded successfully");
    info!("  Chat model: {}", config.grok.chat_model);
    info!("  Wordle model: {}", config.grok.wordle_model);
    info!("  Announce channel: #{}", config.discord.announce_channel);

    let storage = Storage::from_config(&config.database).await;
    let gifs = GifLibrary::load(&config.gifs.file);

    let generator: Arc<dyn TextGenerator> = Arc::new(GrokClient::new(&config.grok)?);

    let mut responder = ScoreResponder::new()?;
    if config.scores.wordle_ai_enabled {
        responder = responder.with_generated_wordle(
            generator.clone(),
            Duration::from_secs(config.grok.timeout_secs),
        );
    }
    info!(
        "Wordle replies: {}",
        if responder.generates_wordle() { "generated by Grok" } else { "canned" }
    );

    let leaderboard = LeaderboardService::from_config(&config.leaderboard)?;
    if leaderboard.is_none() {
        warn!("No leaderboard URL configured, /hamsterdle and scheduled posts disabled");
    }

    let services = BotServices {
        responder,
        generator,
        storage,
        gifs,
        leaderboard,
        announce_channel: config.discord.announce_channel.clone(),
    };

    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let discord_bot = DiscordBotBuilder::new(config.discord.token.clone(), services, shutdown_rx)
        .build()
        .await?;

    info!("Starting Discord bot...");
    let mut discord_task = tokio::spawn(discord_bot.run());

    let shutdown = tokio::select! {
        biased;
        _ = shutdown_signal() => {
            info!("Shutdown signal received - disconnecting from Discord...");
            true
        }
        _ = &mut discord_task => false,
    };

    if shutdown {
        if let Err(e) = shutdown_tx.send(true) {
            warn!("Shutdown channel closed (Discord task already exited): {}", e);
        }
        match tokio::time::timeout(Duration::from_secs(5), discord_task).await {
            Ok(Ok(())) => info!("Discord task stopped gracefully"),
            Ok(Err(e)) => warn!("Discord task panicked: {}", e),
            Err(_) => warn!("Discord shutdown timed out"),
        }
    }

    info!("Exiting...");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C"),
        _ = terminate => info!("Received SIGTERM"),
    }
}
