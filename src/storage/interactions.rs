//! Interaction log repository.

use std::fmt;

use sqlx::SqlitePool;

use crate::common::StorageError;
use crate::scores::GameKind;

/// What the bot did in response to a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionType {
    Wordle,
    Connections,
    Strands,
    Mention,
    Gif,
    Hamsterdle,
    SetPrompt,
    ShowPrompt,
}

impl ActionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Wordle => "wordle",
            Self::Connections => "connections",
            Self::Strands => "strands",
            Self::Mention => "mention",
            Self::Gif => "gif",
            Self::Hamsterdle => "hamsterdle",
            Self::SetPrompt => "set_prompt",
            Self::ShowPrompt => "show_prompt",
        }
    }
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<GameKind> for ActionType {
    fn from(game: GameKind) -> Self {
        match game {
            GameKind::Wordle => Self::Wordle,
            GameKind::Connections => Self::Connections,
            GameKind::Strands => Self::Strands,
        }
    }
}

/// Where and by whom an interaction happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InteractionOrigin {
    pub guild_id: u64,
    pub guild_name: String,
    pub channel_id: u64,
    pub channel_name: String,
    pub user_id: u64,
    pub user_name: String,
    pub user_display_name: String,
}

/// One logged exchange.
#[derive(Debug, Clone)]
pub struct InteractionRecord {
    pub origin: InteractionOrigin,
    pub action: ActionType,
    pub user_message: Option<String>,
    pub bot_response: Option<String>,
}

/// Repository for the interaction log.
pub struct InteractionRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> InteractionRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Append one interaction.
    pub async fn insert(&self, record: &InteractionRecord) -> Result<(), StorageError> {
        let now = chrono::Utc::now().timestamp();
        let origin = &record.origin;

        sqlx::query(
            r#"
            INSERT INTO bot_messages (
                guild_id, guild_name, channel_id, channel_name,
                user_id, user_name, user_display_name,
                user_message, bot_response, action_type, created_at, updated_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(origin.guild_id as i64)
        .bind(&origin.guild_name)
        .bind(origin.channel_id as i64)
        .bind(&origin.channel_name)
        .bind(origin.user_id as i64)
        .bind(&origin.user_name)
        .bind(&origin.user_display_name)
        .bind(record.user_message.as_deref())
        .bind(record.bot_response.as_deref())
        .bind(record.action.as_str())
        .bind(now)
        .bind(now)
        .execute(self.pool)
        .await?;

        Ok(())
    }
}
