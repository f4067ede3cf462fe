//! Per-guild system prompt repository.

use sqlx::SqlitePool;

use crate::common::StorageError;
use crate::storage::InteractionOrigin;

/// Repository for custom Grok prompts.
pub struct PromptRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> PromptRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert or replace the prompt for the origin's guild, recording who set it.
    pub async fn upsert(&self, origin: &InteractionOrigin, system_prompt: &str) -> Result<(), StorageError> {
        let now = chrono::Utc::now().timestamp();

        sqlx::query(
            r#"
            INSERT INTO server_prompts (
                guild_id, guild_name, user_id, user_name, user_display_name,
                system_prompt, created_at, updated_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT(guild_id) DO UPDATE SET
                guild_name = excluded.guild_name,
                user_id = excluded.user_id,
                user_name = excluded.user_name,
                user_display_name = excluded.user_display_name,
                system_prompt = excluded.system_prompt,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(origin.guild_id as i64)
        .bind(&origin.guild_name)
        .bind(origin.user_id as i64)
        .bind(&origin.user_name)
        .bind(&origin.user_display_name)
        .bind(system_prompt)
        .bind(now)
        .bind(now)
        .execute(self.pool)
        .await?;

        Ok(())
    }

    /// The guild's custom prompt, if one was set.
    pub async fn find(&self, guild_id: u64) -> Result<Option<String>, StorageError> {
        let prompt = sqlx::query_scalar::<_, String>(
            "SELECT system_prompt FROM server_prompts WHERE guild_id = ?",
        )
        .bind(guild_id as i64)
        .fetch_optional(self.pool)
        .await?;

        Ok(prompt)
    }
}
