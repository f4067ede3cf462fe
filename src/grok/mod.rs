//! Remote text generation (xAI Grok chat completions).

pub mod client;
pub mod prompts;

use async_trait::async_trait;

use crate::common::GrokError;

pub use client::GrokClient;
pub use prompts::{DEFAULT_CHAT_PROMPT, WORDLE_PERSONA_PROMPT};

/// Which configured model a request should use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelRole {
    /// Free-form answers to mentions.
    Chat,
    /// Short Wordle score remarks.
    Wordle,
}

/// A service that turns a system prompt and a user message into a reply.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(
        &self,
        system_prompt: &str,
        user_message: &str,
        role: ModelRole,
    ) -> Result<String, GrokError>;
}
