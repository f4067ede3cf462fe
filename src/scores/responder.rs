//! Score reply cascade.
//!
//! Tries Wordle, then Connections, then Strands, and returns the first reply.
//! Wordle replies may optionally be written by a [`TextGenerator`]; a failed
//! or slow generation yields no Wordle reply and the cascade moves on.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use crate::common::GrokError;
use crate::grok::{ModelRole, TextGenerator, WORDLE_PERSONA_PROMPT};
use crate::scores::{ConnectionsMatcher, GameKind, StrandsMatcher, WordleMatcher};

/// A reply to a recognized share.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreReply {
    pub game: GameKind,
    pub text: String,
}

impl ScoreReply {
    fn new(game: GameKind, text: impl Into<String>) -> Self {
        Self {
            game,
            text: text.into(),
        }
    }
}

struct GeneratedWordle {
    generator: Arc<dyn TextGenerator>,
    timeout: Duration,
}

/// Runs the matchers in priority order.
pub struct ScoreResponder {
    wordle: WordleMatcher,
    connections: ConnectionsMatcher,
    strands: StrandsMatcher,
    generated_wordle: Option<GeneratedWordle>,
}

impl ScoreResponder {
    pub fn new() -> Result<Self, fancy_regex::Error> {
        Ok(Self {
            wordle: WordleMatcher::new()?,
            connections: ConnectionsMatcher::new()?,
            strands: StrandsMatcher::new()?,
            generated_wordle: None,
        })
    }

    /// Write Wordle replies with `generator`, giving up after `timeout`.
    pub fn with_generated_wordle(mut self, generator: Arc<dyn TextGenerator>, timeout: Duration) -> Self {
        self.generated_wordle = Some(GeneratedWordle { generator, timeout });
        self
    }

    pub fn generates_wordle(&self) -> bool {
        self.generated_wordle.is_some()
    }

    /// Reply to the first recognized share in `text`.
    pub async fn respond(&self, text: &str) -> Option<ScoreReply> {
        if let Some(reply) = self.wordle_reply(text).await {
            return Some(ScoreReply::new(GameKind::Wordle, reply));
        }
        if let Some(reply) = self.connections.respond(text) {
            return Some(ScoreReply::new(GameKind::Connections, reply));
        }
        if let Some(reply) = self.strands.respond(text) {
            return Some(ScoreReply::new(GameKind::Strands, reply));
        }
        debug!("No score share recognized");
        None
    }

    async fn wordle_reply(&self, text: &str) -> Option<String> {
        let outcome = self.wordle.classify(text)?;

        let Some(generated) = &self.generated_wordle else {
            return Some(outcome.response().to_string());
        };

        let request = generated
            .generator
            .generate(WORDLE_PERSONA_PROMPT, text, ModelRole::Wordle);

        let result = match tokio::time::timeout(generated.timeout, request).await {
            Ok(result) => result,
            Err(_) => Err(GrokError::Timeout {
                seconds: generated.timeout.as_secs(),
            }),
        };

        match result {
            Ok(reply) => Some(reply),
            Err(e) => {
                warn!("Generated Wordle reply failed ({:?}): {}", outcome, e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    enum Behavior {
        Reply(&'static str),
        Fail,
        Hang,
    }

    struct FakeGenerator {
        behavior: Behavior,
        calls: AtomicUsize,
    }

    impl FakeGenerator {
        fn new(behavior: Behavior) -> Arc<Self> {
            Arc::new(Self {
                behavior,
                calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl TextGenerator for FakeGenerator {
        async fn generate(
            &self,
            system_prompt: &str,
            _user_message: &str,
            role: ModelRole,
        ) -> Result<String, GrokError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            assert_eq!(system_prompt, WORDLE_PERSONA_PROMPT);
            assert_eq!(role, ModelRole::Wordle);
            match self.behavior {
                Behavior::Reply(text) => Ok(text.to_string()),
                Behavior::Fail => Err(GrokError::EmptyCompletion),
                Behavior::Hang => {
                    tokio::time::sleep(Duration::from_secs(3600)).await;
                    Ok("too late".to_string())
                }
            }
        }
    }

    const CONNECTIONS_LOSS: &str =
        "Connections #100\n🟨🟨🟨🟨\n🟩🟩🟩🟩\n🟦🟦🟦🟦\n🟪🟪🟪🟨\n🟩🟦🟪🟨\n🟨🟩🟦🟪";
    const STRANDS_WIN: &str = "Strands #507\n“Chips in”\n🔵🔵🔵🟡\n🔵🔵🔵";

    #[tokio::test]
    async fn test_cascade_picks_each_game() {
        let responder = ScoreResponder::new().unwrap();

        let reply = responder.respond("Wordle 1,025 3/6").await.unwrap();
        assert_eq!(reply, ScoreReply::new(GameKind::Wordle, "Good score!"));

        let reply = responder.respond(CONNECTIONS_LOSS).await.unwrap();
        assert_eq!(reply.game, GameKind::Connections);
        assert_eq!(reply.text, "You lost! Better luck tomorrow!");

        let reply = responder.respond(STRANDS_WIN).await.unwrap();
        assert_eq!(reply.game, GameKind::Strands);
        assert_eq!(reply.text, "Nice job solving today's strands!");

        assert_eq!(responder.respond("Just talking about wordle").await, None);
    }

    #[tokio::test]
    async fn test_wordle_wins_over_later_games() {
        let responder = ScoreResponder::new().unwrap();
        let text = format!("Wordle 900 X/6\n{}", STRANDS_WIN);
        let reply = responder.respond(&text).await.unwrap();
        assert_eq!(reply.game, GameKind::Wordle);
        assert_eq!(reply.text, "You lost! ;(");
    }

    #[tokio::test]
    async fn test_generated_wordle_reply() {
        let generator = FakeGenerator::new(Behavior::Reply("Solid work! 💪"));
        let responder = ScoreResponder::new()
            .unwrap()
            .with_generated_wordle(generator.clone(), Duration::from_secs(5));

        let reply = responder.respond("Wordle 1,025 3/6").await.unwrap();
        assert_eq!(reply, ScoreReply::new(GameKind::Wordle, "Solid work! 💪"));
        assert_eq!(generator.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_generator_not_called_without_wordle_share() {
        let generator = FakeGenerator::new(Behavior::Reply("unused"));
        let responder = ScoreResponder::new()
            .unwrap()
            .with_generated_wordle(generator.clone(), Duration::from_secs(5));

        let reply = responder.respond(CONNECTIONS_LOSS).await.unwrap();
        assert_eq!(reply.game, GameKind::Connections);
        assert_eq!(generator.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_failed_generation_gives_no_wordle_reply() {
        let generator = FakeGenerator::new(Behavior::Fail);
        let responder = ScoreResponder::new()
            .unwrap()
            .with_generated_wordle(generator.clone(), Duration::from_secs(5));

        assert_eq!(responder.respond("wordle 123 X/6").await, None);
        assert_eq!(generator.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_failed_generation_falls_through_to_other_games() {
        let generator = FakeGenerator::new(Behavior::Fail);
        let responder = ScoreResponder::new()
            .unwrap()
            .with_generated_wordle(generator, Duration::from_secs(5));

        let text = format!("Wordle 900 4/6\n{}", CONNECTIONS_LOSS);
        let reply = responder.respond(&text).await.unwrap();
        assert_eq!(reply.game, GameKind::Connections);
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_generation_times_out() {
        let generator = FakeGenerator::new(Behavior::Hang);
        let responder = ScoreResponder::new()
            .unwrap()
            .with_generated_wordle(generator, Duration::from_secs(30));

        assert_eq!(responder.respond("Wordle 1 2/6").await, None);
    }
}
