//! HTTP client for the xAI chat completions endpoint.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::common::GrokError;
use crate::config::types::GrokConfig;
use crate::grok::{ModelRole, TextGenerator};

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Grok chat client. One request per call, no retries.
#[derive(Debug, Clone)]
pub struct GrokClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
    chat_model: String,
    wordle_model: String,
}

impl GrokClient {
    pub fn new(config: &GrokConfig) -> Result<Self, GrokError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            http,
            endpoint: format!("{}/chat/completions", config.base_url.trim_end_matches('/')),
            api_key: config.api_key.clone(),
            chat_model: config.chat_model.clone(),
            wordle_model: config.wordle_model.clone(),
        })
    }

    fn model(&self, role: ModelRole) -> &str {
        match role {
            ModelRole::Chat => &self.chat_model,
            ModelRole::Wordle => &self.wordle_model,
        }
    }
}

#[async_trait]
impl TextGenerator for GrokClient {
    async fn generate(
        &self,
        system_prompt: &str,
        user_message: &str,
        role: ModelRole,
    ) -> Result<String, GrokError> {
        let model = self.model(role);
        let request = ChatRequest {
            model,
            messages: [
                ChatMessage { role: "system", content: system_prompt },
                ChatMessage { role: "user", content: user_message },
            ],
        };

        debug!("Requesting completion from {} ({} chars)", model, user_message.chars().count());

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GrokError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let completion: ChatResponse = response.json().await?;
        first_choice_text(completion)
    }
}

fn first_choice_text(completion: ChatResponse) -> Result<String, GrokError> {
    completion
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
        .ok_or(GrokError::EmptyCompletion)
}
