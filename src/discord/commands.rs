//! Slash commands (/hamsterdle, /gif, /set_prompt, /show_prompt).

use std::sync::Arc;

use chrono::Utc;
use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    CreateEmbed, CreateInteractionResponse, CreateInteractionResponseMessage,
    EditInteractionResponse,
};
use tracing::{debug, info};

use crate::discord::embeds::{current_prompt_embed, leaderboard_embed, prompt_saved_embed};
use crate::discord::handler::{command_origin, BotServices};
use crate::grok::DEFAULT_CHAT_PROMPT;
use crate::leaderboard::{LeaderboardPost, LEADERBOARD_ERROR_TEXT};
use crate::storage::{ActionType, InteractionRecord};

const GUILD_ONLY_TEXT: &str = "❌ This command can only be used in servers, not in DMs.";
const NO_SCORES_TEXT: &str = "No hamsterdle scores yet today.";
const LEADERBOARD_DISABLED_TEXT: &str = "The hamsterdle leaderboard is not configured.";

/// Slash command definitions registered with Discord.
pub fn definitions() -> Vec<CreateCommand> {
    vec![
        CreateCommand::new("hamsterdle").description("display the daily hamsterdle leaderboard"),
        CreateCommand::new("gif")
            .description("display a random gif, optionally from a specific category")
            .add_option(
                CreateCommandOption::new(CommandOptionType::String, "category", "gif category")
                    .required(false),
            ),
        CreateCommand::new("set_prompt")
            .description("Set a custom Grok system prompt for **this** server")
            .add_option(
                CreateCommandOption::new(CommandOptionType::String, "prompt", "the new system prompt")
                    .required(true),
            ),
        CreateCommand::new("show_prompt")
            .description("Show the current Grok system prompt for **this** server"),
    ]
}

/// Command handler for Discord bot.
#[derive(Clone)]
pub struct CommandHandler {
    services: Arc<BotServices>,
}

impl CommandHandler {
    pub fn new(services: Arc<BotServices>) -> Self {
        Self { services }
    }

    /// Dispatch a slash command by name.
    pub async fn handle_command(&self, ctx: &Context, command: &CommandInteraction) -> anyhow::Result<()> {
        debug!("Processing command /{} from {}", command.data.name, command.user.name);

        match command.data.name.as_str() {
            "hamsterdle" => self.handle_hamsterdle(ctx, command).await,
            "gif" => self.handle_gif(ctx, command).await,
            "set_prompt" => self.handle_set_prompt(ctx, command).await,
            "show_prompt" => self.handle_show_prompt(ctx, command).await,
            other => {
                debug!("Ignoring unknown command /{}", other);
                Ok(())
            }
        }
    }

    async fn handle_hamsterdle(&self, ctx: &Context, command: &CommandInteraction) -> anyhow::Result<()> {
        info!("/hamsterdle from {}", command.user.name);

        // The leaderboard request can outlast Discord's three second window.
        command.defer(&ctx.http).await?;

        let post = match &self.services.leaderboard {
            Some(leaderboard) => Some(leaderboard.poll(Utc::now()).await),
            None => None,
        };

        let (response, logged_text) = match &post {
            Some(LeaderboardPost::Standings(report)) => (
                EditInteractionResponse::new().embed(leaderboard_embed(report)),
                report.countdown.clone(),
            ),
            Some(LeaderboardPost::Empty) => (
                EditInteractionResponse::new().content(NO_SCORES_TEXT),
                NO_SCORES_TEXT.to_string(),
            ),
            Some(LeaderboardPost::Unavailable) => (
                EditInteractionResponse::new().content(LEADERBOARD_ERROR_TEXT),
                LEADERBOARD_ERROR_TEXT.to_string(),
            ),
            None => (
                EditInteractionResponse::new().content(LEADERBOARD_DISABLED_TEXT),
                LEADERBOARD_DISABLED_TEXT.to_string(),
            ),
        };
        command.edit_response(&ctx.http, response).await?;

        self.log(ctx, command, ActionType::Hamsterdle, None, Some(logged_text)).await;
        Ok(())
    }

    async fn handle_gif(&self, ctx: &Context, command: &CommandInteraction) -> anyhow::Result<()> {
        let category = string_option(command, "category");
        info!("/gif from {} (category: {:?})", command.user.name, category);

        let message = self
            .services
            .gifs
            .pick(category, &mut rand::thread_rng())
            .into_message();

        respond_text(ctx, command, &message).await?;

        self.log(
            ctx,
            command,
            ActionType::Gif,
            category.map(str::to_string),
            Some(message),
        )
        .await;
        Ok(())
    }

    async fn handle_set_prompt(&self, ctx: &Context, command: &CommandInteraction) -> anyhow::Result<()> {
        let Some(origin) = command_origin(ctx, command) else {
            return respond_text(ctx, command, GUILD_ONLY_TEXT).await;
        };
        let prompt = string_option(command, "prompt").unwrap_or_default();
        info!("/set_prompt from {} in {}", origin.user_name, origin.guild_name);

        let stored = self.services.storage.upsert_server_prompt(&origin, prompt).await;
        respond_embed(ctx, command, prompt_saved_embed(prompt, stored)).await?;

        let record = InteractionRecord {
            origin,
            action: ActionType::SetPrompt,
            user_message: Some(prompt.to_string()),
            bot_response: Some(if stored { "Prompt saved" } else { "Database error" }.to_string()),
        };
        self.services.storage.log_interaction(&record).await;
        Ok(())
    }

    async fn handle_show_prompt(&self, ctx: &Context, command: &CommandInteraction) -> anyhow::Result<()> {
        let Some(origin) = command_origin(ctx, command) else {
            return respond_text(ctx, command, GUILD_ONLY_TEXT).await;
        };
        info!("/show_prompt from {} in {}", origin.user_name, origin.guild_name);

        let custom = self.services.storage.get_server_prompt(origin.guild_id).await;
        respond_embed(ctx, command, current_prompt_embed(custom.as_deref(), DEFAULT_CHAT_PROMPT)).await?;

        let record = InteractionRecord {
            origin,
            action: ActionType::ShowPrompt,
            user_message: None,
            bot_response: Some(custom.unwrap_or_else(|| DEFAULT_CHAT_PROMPT.to_string())),
        };
        self.services.storage.log_interaction(&record).await;
        Ok(())
    }

    /// Log the command if it was used in a guild.
    async fn log(
        &self,
        ctx: &Context,
        command: &CommandInteraction,
        action: ActionType,
        user_message: Option<String>,
        bot_response: Option<String>,
    ) {
        let Some(origin) = command_origin(ctx, command) else {
            return;
        };
        let record = InteractionRecord {
            origin,
            action,
            user_message,
            bot_response,
        };
        self.services.storage.log_interaction(&record).await;
    }
}

/// The string value of option `name`, if given.
fn string_option<'a>(command: &'a CommandInteraction, name: &str) -> Option<&'a str> {
    command
        .data
        .options
        .iter()
        .find(|option| option.name == name)
        .and_then(|option| option.value.as_str())
}

async fn respond_text(ctx: &Context, command: &CommandInteraction, text: &str) -> anyhow::Result<()> {
    let message = CreateInteractionResponseMessage::new().content(text);
    command
        .create_response(&ctx.http, CreateInteractionResponse::Message(message))
        .await?;
    Ok(())
}

async fn respond_embed(ctx: &Context, command: &CommandInteraction, embed: CreateEmbed) -> anyhow::Result<()> {
    let message = CreateInteractionResponseMessage::new().embed(embed);
    command
        .create_response(&ctx.http, CreateInteractionResponse::Message(message))
        .await?;
    Ok(())
}
