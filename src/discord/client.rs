//! Discord bot client abstraction.
//!
//! Provides a high-level interface for creating and running the Discord bot,
//! hiding serenity implementation details from the rest of the application.
//! Gateway events are forwarded to a channel and handled on their own tasks;
//! the same loop fires the scheduled leaderboard posts.

use std::sync::Arc;
use std::time::Duration;

use backon::BackoffBuilder;
use chrono::{DateTime, Utc};
use serenity::all::{Context, GatewayIntents, Interaction, Message, Ready};
use serenity::async_trait;
use serenity::http::HttpBuilder;
use serenity::prelude::EventHandler;
use serenity::Client;
use tokio::sync::{mpsc, watch};
use tokio::time::sleep;
use tracing::{debug, error, info, warn};

use crate::discord::handler::{BotHandler, BotServices};

#[derive(Debug, Clone)]
pub enum DiscordBotEvent {
    /// Bot connected and ready.
    Ready { context: Context, ready: Ready },
    /// Message received.
    Message { context: Context, message: Message },
    /// Slash command or other interaction received.
    Interaction {
        context: Context,
        interaction: Interaction,
    },
    Disconnected,
}

struct DiscordBotEvents {
    discord_events_tx: mpsc::UnboundedSender<DiscordBotEvent>,
}

impl DiscordBotEvents {
    fn new(discord_events_tx: mpsc::UnboundedSender<DiscordBotEvent>) -> Self {
        Self { discord_events_tx }
    }

    fn forward(&self, event: DiscordBotEvent) {
        if let Err(error) = self.discord_events_tx.send(event) {
            warn!("Failed to process discord event: {}", error);
        }
    }
}

#[async_trait]
impl EventHandler for DiscordBotEvents {
    async fn ready(&self, context: Context, ready: Ready) {
        self.forward(DiscordBotEvent::Ready { context, ready });
    }

    async fn message(&self, context: Context, message: Message) {
        self.forward(DiscordBotEvent::Message { context, message });
    }

    async fn interaction_create(&self, context: Context, interaction: Interaction) {
        self.forward(DiscordBotEvent::Interaction {
            context,
            interaction,
        });
    }
}

/// Builder for creating the Discord bot.
pub struct DiscordBotBuilder {
    token: String,
    services: Arc<BotServices>,
    shutdown_rx: watch::Receiver<bool>,
}

impl DiscordBotBuilder {
    pub fn new(token: String, services: BotServices, shutdown_rx: watch::Receiver<bool>) -> Self {
        Self {
            token,
            services: Arc::new(services),
            shutdown_rx,
        }
    }

    /// Build the Discord bot.
    pub async fn build(self) -> anyhow::Result<DiscordBot> {
        let (discord_events_tx, discord_events_rx) = mpsc::unbounded_channel::<DiscordBotEvent>();

        let client = build_client(&self.token, discord_events_tx.clone()).await?;

        Ok(DiscordBot {
            client: Some(client),
            token: self.token,
            handler: BotHandler::new(self.services),
            discord_events_rx,
            discord_events_tx,
            shutdown_rx: self.shutdown_rx,
        })
    }
}

async fn build_client(token: &str, discord_events_tx: mpsc::UnboundedSender<DiscordBotEvent>) -> anyhow::Result<Client> {
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;

    // Build a custom reqwest client with timeout settings
    let reqwest_client = reqwest::Client::builder()
        .timeout(Duration::from_secs(15))
        .connect_timeout(Duration::from_secs(10))
        .build()?;

    let http = HttpBuilder::new(token).client(reqwest_client).build();

    let events = DiscordBotEvents::new(discord_events_tx);
    let client = serenity::client::ClientBuilder::new_with_http(http, intents)
        .event_handler(events)
        .await?;
    Ok(client)
}

pub struct DiscordBot {
    client: Option<Client>,
    token: String,
    handler: BotHandler,
    discord_events_rx: mpsc::UnboundedReceiver<DiscordBotEvent>,
    discord_events_tx: mpsc::UnboundedSender<DiscordBotEvent>,
    shutdown_rx: watch::Receiver<bool>,
}

impl DiscordBot {
    pub async fn run(mut self) {
        // Extract shard manager before we move client into run_connection
        let shard_manager = self.client.as_ref().map(|c| c.shard_manager.clone());
        let client = &mut self.client;
        let discord_events_rx = &mut self.discord_events_rx;
        let handler = &self.handler;
        let mut shutdown_rx = self.shutdown_rx.clone();

        tokio::select! {
            _ = Self::run_connection(client, &self.token, &self.discord_events_tx) => {},
            _ = Self::process_events(discord_events_rx, handler, &mut self.shutdown_rx) => {},
            _ = async {
                // Wait for shutdown signal
                loop {
                    if shutdown_rx.changed().await.is_err() || *shutdown_rx.borrow() {
                        break;
                    }
                }
                // Gracefully shutdown Discord gateway
                if let Some(ref manager) = shard_manager {
                    info!("Initiating graceful Discord shutdown...");
                    manager.shutdown_all().await;
                    info!("Discord shutdown complete");
                }
            } => {}
        }
        info!("Discord task ended");
    }

    async fn run_connection(
        client: &mut Option<Client>,
        token: &str,
        discord_events_tx: &mpsc::UnboundedSender<DiscordBotEvent>,
    ) {
        /// 5s initial, 5min max, factor 1.1, with jitter, unlimited retries.
        fn discord_backoff() -> impl Iterator<Item = Duration> {
            backon::ExponentialBuilder::default()
                .with_min_delay(Duration::from_secs(5))
                .with_max_delay(Duration::from_secs(5 * 60))
                .with_factor(1.1)
                .with_jitter()
                .without_max_times()
                .build()
        }

        let mut backoff = discord_backoff();

        loop {
            info!("Connecting to Discord...");

            let mut client = match client.take() {
                Some(client) => client,
                None => match build_client(token, discord_events_tx.clone()).await {
                    Ok(client) => {
                        backoff = discord_backoff();
                        client
                    }
                    Err(e) => {
                        error!("Failed to rebuild Discord client: {}", e);
                        let delay = backoff.next().unwrap_or(Duration::from_secs(5 * 60));
                        warn!("Retrying in {:.1}s...", delay.as_secs_f64());
                        sleep(delay).await;
                        continue;
                    }
                },
            };

            match client.start().await {
                Ok(()) => {
                    info!("Discord client disconnected normally");
                    if let Err(error) = discord_events_tx.send(DiscordBotEvent::Disconnected) {
                        warn!("Failed to process discord event: {}", error);
                    }
                    break;
                }
                Err(e) => {
                    error!("Discord client error: {}", e);
                    let delay = backoff.next().unwrap_or(Duration::from_secs(5 * 60));
                    warn!(
                        "Discord disconnected. Reconnecting in {:.1}s...",
                        delay.as_secs_f64(),
                    );
                    if let Err(error) = discord_events_tx.send(DiscordBotEvent::Disconnected) {
                        warn!("Failed to process discord event: {}", error);
                    }
                    sleep(delay).await;
                }
            }
        }
    }

    async fn process_events(
        discord_events_rx: &mut mpsc::UnboundedReceiver<DiscordBotEvent>,
        handler: &BotHandler,
        shutdown_rx: &mut watch::Receiver<bool>,
    ) {
        let mut discord_connection: Option<Context> = None;
        let mut next_post = next_post_after(handler, Utc::now());

        if let Some(at) = next_post {
            info!("Next leaderboard post at {}", at);
        }

        loop {
            tokio::select! {
                event = discord_events_rx.recv() => {
                    let Some(event) = event else {
                        debug!("Discord events channel closed.");
                        break;
                    };

                    match event {
                        DiscordBotEvent::Ready { context, ready } => {
                            discord_connection = Some(context.clone());
                            let handler = handler.clone();
                            tokio::spawn(async move { handler.handle_ready(context, ready).await });
                        }
                        DiscordBotEvent::Message { context, message } => {
                            let handler = handler.clone();
                            tokio::spawn(async move { handler.handle_message(context, message).await });
                        }
                        DiscordBotEvent::Interaction { context, interaction } => {
                            let handler = handler.clone();
                            tokio::spawn(async move { handler.handle_interaction(context, interaction).await });
                        }
                        DiscordBotEvent::Disconnected => {
                            discord_connection = None;
                        }
                    }
                }

                // Scheduled leaderboard post (skipped if not connected)
                _ = wait_until(next_post) => {
                    let fired_at = next_post.unwrap_or_else(Utc::now);
                    match discord_connection {
                        Some(ref context) => {
                            let handler = handler.clone();
                            let context = context.clone();
                            tokio::spawn(async move { handler.announce_leaderboard(&context).await });
                        }
                        None => debug!("Skipping leaderboard post - Discord not connected"),
                    }
                    next_post = next_post_after(handler, fired_at.max(Utc::now()));
                }

                // Shutdown signal
                changed = shutdown_rx.changed() => {
                    if changed.is_err() || *shutdown_rx.borrow() {
                        info!("Shutdown signal received, stopping event processing");
                        break;
                    }
                }
            }
        }
    }
}

fn next_post_after(handler: &BotHandler, after: DateTime<Utc>) -> Option<DateTime<Utc>> {
    handler
        .services()
        .leaderboard
        .as_ref()
        .and_then(|leaderboard| leaderboard.next_announcement(after))
}

/// Sleep until `at`, or forever when nothing is scheduled.
async fn wait_until(at: Option<DateTime<Utc>>) {
    match at {
        Some(at) => sleep((at - Utc::now()).to_std().unwrap_or_default()).await,
        None => std::future::pending::<()>().await,
    }
}
