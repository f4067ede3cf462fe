//! Discord event handling.
//!
//! Score shares get a canned (or generated) reply, mentions of the bot are
//! answered by the language model, and slash commands are passed on to the
//! [`CommandHandler`]. Every reply in a guild is written to the interaction log.

use std::sync::Arc;

use chrono::Utc;
use serenity::all::{
    ChannelId, ChannelType, Command, CommandInteraction, Context, CreateMessage, GuildId,
    Interaction, Message, Ready, User, UserId,
};
use tracing::{debug, error, info, warn};

use crate::discord::commands::{self, CommandHandler};
use crate::discord::embeds::{leaderboard_embed, truncate, MESSAGE_LIMIT};
use crate::gifs::GifLibrary;
use crate::grok::{ModelRole, TextGenerator, DEFAULT_CHAT_PROMPT};
use crate::leaderboard::{LeaderboardPost, LeaderboardService};
use crate::scores::ScoreResponder;
use crate::storage::{ActionType, InteractionOrigin, InteractionRecord, Storage};

/// Everything the bot needs to answer users.
pub struct BotServices {
    pub responder: ScoreResponder,
    pub generator: Arc<dyn TextGenerator>,
    pub storage: Storage,
    pub gifs: GifLibrary,
    pub leaderboard: Option<LeaderboardService>,
    /// Channel name for scheduled leaderboard posts.
    pub announce_channel: String,
}

/// Discord event handler. Cheap to clone; each event runs on its own task.
#[derive(Clone)]
pub struct BotHandler {
    services: Arc<BotServices>,
    command_handler: CommandHandler,
}

impl BotHandler {
    pub fn new(services: Arc<BotServices>) -> Self {
        Self {
            command_handler: CommandHandler::new(services.clone()),
            services,
        }
    }

    pub fn services(&self) -> &BotServices {
        &self.services
    }

    /// Register slash commands once the gateway session is up.
    pub async fn handle_ready(&self, ctx: Context, ready: Ready) {
        info!("Discord bot connected as {}", ready.user.name);
        info!("Connected to {} guilds", ready.guilds.len());

        match Command::set_global_commands(&ctx.http, commands::definitions()).await {
            Ok(registered) => info!("Registered {} slash commands", registered.len()),
            Err(e) => error!("Failed to register slash commands: {}", e),
        }
    }

    pub async fn handle_message(&self, ctx: Context, msg: Message) {
        if msg.author.bot {
            return;
        }

        let content = msg.content.trim();
        if content.is_empty() {
            return;
        }

        if let Some(reply) = self.services.responder.respond(content).await {
            info!("{} share from {}: {}", reply.game, msg.author.name, reply.text);
            self.send_reply(&ctx, &msg, reply.game.into(), reply.text).await;
            return;
        }

        let bot_id = ctx.cache.current_user().id;
        if msg.mentions_user_id(bot_id) {
            self.answer_mention(&ctx, &msg, bot_id).await;
        }
    }

    pub async fn handle_interaction(&self, ctx: Context, interaction: Interaction) {
        let Interaction::Command(command) = interaction else {
            return;
        };

        if let Err(e) = self.command_handler.handle_command(&ctx, &command).await {
            error!("Command /{} failed: {}", command.data.name, e);
        }
    }

    /// Post the leaderboard to the announce channel.
    pub async fn announce_leaderboard(&self, ctx: &Context) {
        let Some(leaderboard) = &self.services.leaderboard else {
            return;
        };

        let Some(channel_id) = find_channel_by_name(ctx, &self.services.announce_channel) else {
            warn!(
                "Announce channel #{} not found, skipping leaderboard post",
                self.services.announce_channel
            );
            return;
        };

        let post = leaderboard.poll(Utc::now()).await;
        if let LeaderboardPost::Standings(ref report) = post {
            let message = CreateMessage::new().embed(leaderboard_embed(report));
            if let Err(e) = channel_id.send_message(&ctx.http, message).await {
                error!("Failed to post leaderboard: {}", e);
                return;
            }
        }
        if let Some(text) = post.text() {
            if let Err(e) = channel_id.say(&ctx.http, text).await {
                error!("Failed to post leaderboard text: {}", e);
            }
        }
        info!("Posted scheduled leaderboard to #{}", self.services.announce_channel);
    }

    async fn answer_mention(&self, ctx: &Context, msg: &Message, bot_id: UserId) {
        let question = strip_mention(&msg.content, bot_id);

        let custom_prompt = match msg.guild_id {
            Some(guild_id) => self.services.storage.get_server_prompt(guild_id.get()).await,
            None => None,
        };
        let system_prompt = custom_prompt.as_deref().unwrap_or(DEFAULT_CHAT_PROMPT);

        debug!("Answering mention from {}: {}", msg.author.name, question);
        let typing = msg.channel_id.start_typing(&ctx.http);
        let answer = match self
            .services
            .generator
            .generate(system_prompt, &question, ModelRole::Chat)
            .await
        {
            Ok(answer) => answer,
            Err(e) => {
                warn!("Grok request failed: {}", e);
                format!("Sorry, I encountered an error: {}", e)
            }
        };
        typing.stop();

        self.send_reply(ctx, msg, ActionType::Mention, answer).await;
    }

    async fn send_reply(&self, ctx: &Context, msg: &Message, action: ActionType, text: String) {
        let text = truncate(&text, MESSAGE_LIMIT);
        if let Err(e) = msg.channel_id.say(&ctx.http, &text).await {
            error!("Failed to send {} reply: {}", action, e);
            return;
        }

        if let Some(origin) = message_origin(ctx, msg) {
            let record = InteractionRecord {
                origin,
                action,
                user_message: Some(msg.content.clone()),
                bot_response: Some(text),
            };
            self.services.storage.log_interaction(&record).await;
        }
    }
}

/// Remove `<@id>` and `<@!id>` mentions of the bot from `content`.
fn strip_mention(content: &str, bot_id: UserId) -> String {
    content
        .replace(&format!("<@{}>", bot_id), "")
        .replace(&format!("<@!{}>", bot_id), "")
        .trim()
        .to_string()
}

/// First text channel named `name` across the cached guilds.
fn find_channel_by_name(ctx: &Context, name: &str) -> Option<ChannelId> {
    ctx.cache.guilds().into_iter().find_map(|guild_id| {
        let guild = ctx.cache.guild(guild_id)?;
        guild
            .channels
            .values()
            .find(|channel| channel.kind == ChannelType::Text && channel.name == name)
            .map(|channel| channel.id)
    })
}

/// Where a guild message came from. `None` for direct messages.
fn message_origin(ctx: &Context, msg: &Message) -> Option<InteractionOrigin> {
    let nick = msg.member.as_ref().and_then(|member| member.nick.as_deref());
    build_origin(ctx, msg.guild_id?, msg.channel_id, &msg.author, nick)
}

/// Where a slash command came from. `None` outside guilds.
pub(crate) fn command_origin(ctx: &Context, command: &CommandInteraction) -> Option<InteractionOrigin> {
    let nick = command.member.as_ref().and_then(|member| member.nick.as_deref());
    build_origin(ctx, command.guild_id?, command.channel_id, &command.user, nick)
}

fn build_origin(
    ctx: &Context,
    guild_id: GuildId,
    channel_id: ChannelId,
    user: &User,
    nick: Option<&str>,
) -> Option<InteractionOrigin> {
    let (guild_name, channel_name) = match ctx.cache.guild(guild_id) {
        Some(guild) => (
            guild.name.clone(),
            guild
                .channels
                .get(&channel_id)
                .map(|channel| channel.name.clone())
                .unwrap_or_default(),
        ),
        None => (String::new(), String::new()),
    };

    Some(InteractionOrigin {
        guild_id: guild_id.get(),
        guild_name,
        channel_id: channel_id.get(),
        channel_name,
        user_id: user.id.get(),
        user_name: user.name.clone(),
        user_display_name: nick.unwrap_or_else(|| user.display_name()).to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_mention() {
        let bot = UserId::new(1234);
        assert_eq!(strip_mention("<@1234> what's up?", bot), "what's up?");
        assert_eq!(strip_mention("hey <@!1234>", bot), "hey");
        assert_eq!(strip_mention("<@1234> ping <@5678>", bot), "ping <@5678>");
        assert_eq!(strip_mention("<@1234>", bot), "");
    }
}
