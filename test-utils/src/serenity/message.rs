//! Test factory for creating Serenity Message objects.

use serde_json::{json, Value};
use serenity::all::Message;

/// `UserPublicFlags::VERIFIED_BOT`.
const VERIFIED_BOT_FLAG: u64 = 1 << 16;

/// Builder producing a Serenity `Message` from gateway-shaped JSON.
///
/// Defaults to a human author posting plain text in a DM; chain setters to add a
/// guild, bot flags, a webhook, embeds, a poll or attachments.
///
/// # Panics
/// - `build()` panics if the JSON cannot be deserialized (indicates invalid test data)
pub struct TestMessageBuilder {
    message_id: u64,
    channel_id: u64,
    author_id: u64,
    username: String,
    guild_id: Option<u64>,
    content: String,
    bot: bool,
    system: bool,
    verified_bot: bool,
    webhook_id: Option<u64>,
    embeds: usize,
    poll: Option<(String, Vec<String>)>,
    attachments: Vec<(String, String)>,
}

impl TestMessageBuilder {
    /// Creates a builder for a message with the given IDs and author username.
    ///
    /// # Arguments
    /// - `message_id` - Discord message ID (snowflake)
    /// - `channel_id` - Discord channel ID (snowflake)
    /// - `username` - Author username
    pub fn new(message_id: u64, channel_id: u64, username: &str) -> Self {
        Self {
            message_id,
            channel_id,
            author_id: message_id + 1,
            username: username.to_string(),
            guild_id: None,
            content: String::new(),
            bot: false,
            system: false,
            verified_bot: false,
            webhook_id: None,
            embeds: 0,
            poll: None,
            attachments: Vec::new(),
        }
    }

    pub fn author_id(mut self, author_id: u64) -> Self {
        self.author_id = author_id;
        self
    }

    pub fn guild_id(mut self, guild_id: u64) -> Self {
        self.guild_id = Some(guild_id);
        self
    }

    pub fn content(mut self, content: &str) -> Self {
        self.content = content.to_string();
        self
    }

    pub fn bot(mut self, verified: bool) -> Self {
        self.bot = true;
        self.verified_bot = verified;
        self
    }

    pub fn system(mut self) -> Self {
        self.system = true;
        self
    }

    pub fn webhook_id(mut self, webhook_id: u64) -> Self {
        self.webhook_id = Some(webhook_id);
        self
    }

    pub fn embeds(mut self, count: usize) -> Self {
        self.embeds = count;
        self
    }

    pub fn poll(mut self, question: &str, answers: &[&str]) -> Self {
        self.poll = Some((
            question.to_string(),
            answers.iter().map(|a| a.to_string()).collect(),
        ));
        self
    }

    pub fn attachment(mut self, filename: &str, url: &str) -> Self {
        self.attachments
            .push((filename.to_string(), url.to_string()));
        self
    }

    /// Deserializes the configured values into a Serenity `Message`.
    pub fn build(self) -> Message {
        let public_flags = if self.verified_bot {
            VERIFIED_BOT_FLAG
        } else {
            0
        };

        let attachments: Vec<Value> = self
            .attachments
            .iter()
            .enumerate()
            .map(|(index, (filename, url))| {
                json!({
                    "id": (self.message_id + 1000 + index as u64).to_string(),
                    "filename": filename,
                    "size": 1024,
                    "url": url,
                    "proxy_url": url,
                    "height": null,
                    "width": null,
                    "content_type": null,
                })
            })
            .collect();

        let embeds: Vec<Value> = (0..self.embeds)
            .map(|index| {
                json!({
                    "type": "rich",
                    "title": format!("Embed {}", index),
                })
            })
            .collect();

        let poll = self.poll.map(|(question, answers)| {
            json!({
                "question": { "text": question },
                "answers": answers
                    .iter()
                    .enumerate()
                    .map(|(index, text)| json!({
                        "answer_id": index + 1,
                        "poll_media": { "text": text },
                    }))
                    .collect::<Vec<Value>>(),
                "expiry": null,
                "allow_multiselect": false,
                "layout_type": 1,
            })
        });

        serde_json::from_value(json!({
            "id": self.message_id.to_string(),
            "channel_id": self.channel_id.to_string(),
            "guild_id": self.guild_id.map(|id| id.to_string()),
            "author": {
                "id": self.author_id.to_string(),
                "username": self.username,
                "discriminator": "0",
                "global_name": null,
                "avatar": null,
                "bot": self.bot,
                "system": self.system,
                "public_flags": public_flags,
            },
            "content": self.content,
            "timestamp": "2026-01-01T00:00:00.000000+00:00",
            "edited_timestamp": null,
            "tts": false,
            "mention_everyone": false,
            "mentions": [],
            "mention_roles": [],
            "attachments": attachments,
            "embeds": embeds,
            "pinned": false,
            "webhook_id": self.webhook_id.map(|id| id.to_string()),
            "type": 0,
            "flags": 0,
            "poll": poll,
        }))
        .expect("Failed to create test message - invalid JSON structure")
    }
}
