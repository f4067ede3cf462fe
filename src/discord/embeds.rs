//! Embed builders for leaderboard posts and prompt commands.

use serenity::all::{Colour, CreateEmbed, CreateEmbedFooter, Timestamp};

use crate::leaderboard::LeaderboardReport;

/// Discord's limit on a plain message body.
pub const MESSAGE_LIMIT: usize = 2000;

/// Discord's limits on embed descriptions and field values.
const DESCRIPTION_LIMIT: usize = 4096;
const FIELD_VALUE_LIMIT: usize = 1024;

const LEADERBOARD_TITLE: &str = "🐹 Daily Hamsterdle Leaderboard";
const LEADERBOARD_COLOUR: Colour = Colour(0x964B00);

const SAVED_COLOUR: Colour = Colour(0x00ff00);
const SAVE_FAILED_COLOUR: Colour = Colour(0xffaa00);
const DEFAULT_PROMPT_COLOUR: Colour = Colour(0x808080);

pub fn leaderboard_embed(report: &LeaderboardReport) -> CreateEmbed {
    let mut embed = CreateEmbed::new()
        .title(LEADERBOARD_TITLE)
        .colour(LEADERBOARD_COLOUR)
        .timestamp(Timestamp::now());

    for standing in &report.standings {
        embed = embed.field(
            standing.rank,
            format!("**{}**\nScore: {}", standing.name, standing.score),
            false,
        );
    }

    embed
}

/// Confirmation for `/set_prompt`. `stored` is false when the database write failed.
pub fn prompt_saved_embed(prompt: &str, stored: bool) -> CreateEmbed {
    if !stored {
        return CreateEmbed::new()
            .title("⚠️ Prompt Saved (Database Error)")
            .description("The prompt was set but there was an error saving to the database.")
            .colour(SAVE_FAILED_COLOUR);
    }

    CreateEmbed::new()
        .title("✅ Custom Grok Prompt Saved")
        .description("New prompt has been set:")
        .colour(SAVED_COLOUR)
        .field("Prompt", code_block(prompt, FIELD_VALUE_LIMIT), false)
        .footer(CreateEmbedFooter::new(
            "This prompt will be used for all Grok interactions in this server.",
        ))
}

/// Answer for `/show_prompt`. `custom` is the guild's stored prompt, if any.
pub fn current_prompt_embed(custom: Option<&str>, default_prompt: &str) -> CreateEmbed {
    match custom {
        Some(prompt) => CreateEmbed::new()
            .title("🤖 Current Custom Grok Prompt")
            .description(code_block(prompt, DESCRIPTION_LIMIT))
            .colour(SAVED_COLOUR),
        None => CreateEmbed::new()
            .title("🤖 Current Grok Prompt (Default)")
            .description(code_block(default_prompt, DESCRIPTION_LIMIT))
            .colour(DEFAULT_PROMPT_COLOUR),
    }
}

/// Wrap `text` in a code block no longer than `limit` characters.
fn code_block(text: &str, limit: usize) -> String {
    const FENCE: &str = "```\n";
    const CLOSE: &str = "\n```";
    let room = limit.saturating_sub(FENCE.len() + CLOSE.len());
    format!("{}{}{}", FENCE, truncate(text, room), CLOSE)
}

/// Cut `s` to at most `max_chars` characters.
pub fn truncate(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((end, _)) => s[..end].to_string(),
        None => s.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leaderboard::report::Standing;
    use serde_json::Value;

    fn to_json(embed: CreateEmbed) -> Value {
        serde_json::to_value(embed).unwrap()
    }

    #[test]
    fn test_leaderboard_embed() {
        let report = LeaderboardReport {
            standings: vec![
                Standing {
                    rank: "🥇",
                    name: "Golem".to_string(),
                    score: "1520".to_string(),
                },
                Standing {
                    rank: "🥈",
                    name: "Hammy".to_string(),
                    score: "980.5".to_string(),
                },
            ],
            countdown: "6 hours until the daily hamsterdle ends!".to_string(),
        };

        let json = to_json(leaderboard_embed(&report));
        assert_eq!(json["title"], "🐹 Daily Hamsterdle Leaderboard");
        assert_eq!(json["color"], 0x964B00);
        assert!(json["timestamp"].is_string());

        let fields = json["fields"].as_array().unwrap();
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0]["name"], "🥇");
        assert_eq!(fields[0]["value"], "**Golem**\nScore: 1520");
        assert_eq!(fields[0]["inline"], false);
        assert_eq!(fields[1]["value"], "**Hammy**\nScore: 980.5");
    }

    #[test]
    fn test_prompt_saved_embed() {
        let json = to_json(prompt_saved_embed("be a pirate", true));
        assert_eq!(json["title"], "✅ Custom Grok Prompt Saved");
        assert_eq!(json["color"], 0x00ff00);
        assert_eq!(json["fields"][0]["value"], "```\nbe a pirate\n```");
        assert_eq!(
            json["footer"]["text"],
            "This prompt will be used for all Grok interactions in this server."
        );

        let json = to_json(prompt_saved_embed("be a pirate", false));
        assert_eq!(json["title"], "⚠️ Prompt Saved (Database Error)");
        assert_eq!(json["color"], 0xffaa00);
    }

    #[test]
    fn test_current_prompt_embed() {
        let json = to_json(current_prompt_embed(Some("be brief"), "default"));
        assert_eq!(json["title"], "🤖 Current Custom Grok Prompt");
        assert_eq!(json["description"], "```\nbe brief\n```");
        assert_eq!(json["color"], 0x00ff00);

        let json = to_json(current_prompt_embed(None, "default"));
        assert_eq!(json["title"], "🤖 Current Grok Prompt (Default)");
        assert_eq!(json["description"], "```\ndefault\n```");
        assert_eq!(json["color"], 0x808080);
    }

    #[test]
    fn test_long_prompt_fits_field() {
        let prompt = "a".repeat(5000);
        let json = to_json(prompt_saved_embed(&prompt, true));
        let value = json["fields"][0]["value"].as_str().unwrap();
        assert_eq!(value.chars().count(), FIELD_VALUE_LIMIT);
        assert!(value.ends_with("\n```"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello", 5), "hello");
        assert_eq!(truncate("hello", 3), "hel");
        assert_eq!(truncate("🟨🟩🟦", 2), "🟨🟩");
        assert_eq!(truncate(&"x".repeat(2500), MESSAGE_LIMIT).len(), MESSAGE_LIMIT);
    }
}
