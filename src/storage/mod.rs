//! Persistent storage for the interaction log and per-guild prompts.
//!
//! Backed by SQLite through SQLx. Storage is optional: without a configured
//! database every write reports failure and every read finds nothing, and
//! database errors are logged rather than surfaced to Discord users.

mod interactions;
mod prompts;

pub use interactions::{ActionType, InteractionOrigin, InteractionRecord, InteractionRepository};
pub use prompts::PromptRepository;

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use tracing::{info, warn};

use crate::common::StorageError;
use crate::config::types::DatabaseConfig;

/// Database handle, possibly disabled.
#[derive(Debug, Clone, Default)]
pub struct Storage {
    pool: Option<SqlitePool>,
}

impl Storage {
    /// Connection acquire timeout - keeps a stuck database from stalling replies.
    const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

    /// A handle that stores nothing.
    pub fn disabled() -> Self {
        Self { pool: None }
    }

    /// Open the database at `url` and apply migrations.
    pub async fn connect(url: &str) -> Result<Self, StorageError> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);

        // An in-memory database lives and dies with its single connection.
        let pool = if url.contains(":memory:") {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
                .acquire_timeout(Self::ACQUIRE_TIMEOUT)
                .connect_with(options)
                .await?
        } else {
            SqlitePoolOptions::new()
                .max_connections(5)
                .acquire_timeout(Self::ACQUIRE_TIMEOUT)
                .connect_with(options)
                .await?
        };

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .map_err(sqlx::Error::from)?;

        info!("Database connected and migrations applied");
        Ok(Self { pool: Some(pool) })
    }

    /// Open the configured database, or a disabled handle if none is
    /// configured or it cannot be opened.
    pub async fn from_config(config: &DatabaseConfig) -> Self {
        let Some(ref url) = config.url else {
            warn!("No database configured, interaction logging disabled");
            return Self::disabled();
        };

        match Self::connect(url).await {
            Ok(storage) => storage,
            Err(e) => {
                warn!("Failed to open database, interaction logging disabled: {}", e);
                Self::disabled()
            }
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.pool.is_some()
    }

    fn pool(&self) -> Result<&SqlitePool, StorageError> {
        self.pool.as_ref().ok_or(StorageError::Disabled)
    }

    /// Record an interaction. Returns whether it was stored.
    pub async fn log_interaction(&self, record: &InteractionRecord) -> bool {
        let result = match self.pool() {
            Ok(pool) => InteractionRepository::new(pool).insert(record).await,
            Err(e) => Err(e),
        };

        match result {
            Ok(()) => true,
            Err(StorageError::Disabled) => false,
            Err(e) => {
                warn!("Failed to log {} interaction: {}", record.action, e);
                false
            }
        }
    }

    /// Save the guild's custom prompt. Returns whether it was stored.
    pub async fn upsert_server_prompt(&self, origin: &InteractionOrigin, system_prompt: &str) -> bool {
        let result = match self.pool() {
            Ok(pool) => PromptRepository::new(pool).upsert(origin, system_prompt).await,
            Err(e) => Err(e),
        };

        match result {
            Ok(()) => true,
            Err(StorageError::Disabled) => false,
            Err(e) => {
                warn!("Failed to save prompt for guild {}: {}", origin.guild_id, e);
                false
            }
        }
    }

    /// The guild's custom prompt, if one is stored and readable.
    pub async fn get_server_prompt(&self, guild_id: u64) -> Option<String> {
        let pool = self.pool().ok()?;
        match PromptRepository::new(pool).find(guild_id).await {
            Ok(prompt) => prompt,
            Err(e) => {
                warn!("Failed to read prompt for guild {}: {}", guild_id, e);
                None
            }
        }
    }
}
