//! Inbound message events.
//!
//! A `MessageEvent` is an immutable snapshot of one gateway message with only the
//! fields the pipeline inspects. It is never persisted.

use serenity::all::{Message, UserPublicFlags};

/// Label used in logs when a message has no guild or channel name.
const DIRECT_MESSAGE_LABEL: &str = "Direct Message";

/// Identity and origin flags of a message author.
#[derive(Debug, Clone, PartialEq)]
pub struct MessageAuthor {
    /// Discord user ID.
    pub id: u64,
    /// Username used for opt-out matching and archive file names.
    pub tag: String,
    /// Automated account (bot or webhook).
    pub bot: bool,
    /// Discord system account.
    pub system: bool,
    /// Carries the verified bot public flag.
    pub verified_bot: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MessageAttachment {
    pub url: String,
    pub filename: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MessagePoll {
    pub question: String,
    pub answers: Vec<String>,
}

/// One inbound message as seen by the pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct MessageEvent {
    pub message_id: u64,
    pub author: MessageAuthor,
    /// `None` for direct messages.
    pub guild_id: Option<u64>,
    pub guild_name: Option<String>,
    pub channel_id: u64,
    pub channel_name: Option<String>,
    /// Set when the message was posted through a webhook.
    pub webhook_id: Option<u64>,
    pub content: String,
    pub embed_count: usize,
    pub poll: Option<MessagePoll>,
    /// Attachments in the order Discord delivered them.
    pub attachments: Vec<MessageAttachment>,
}

impl MessageEvent {
    /// Converts a Serenity gateway message into a pipeline event.
    ///
    /// Guild and channel names are not part of the gateway payload and are resolved
    /// by the caller from the cache.
    ///
    /// # Arguments
    /// - `message` - The Serenity message
    /// - `guild_name` - Resolved guild name, if any
    /// - `channel_name` - Resolved channel name, if any
    pub fn from_message(
        message: &Message,
        guild_name: Option<String>,
        channel_name: Option<String>,
    ) -> Self {
        let verified_bot = message
            .author
            .public_flags
            .is_some_and(|flags| flags.contains(UserPublicFlags::VERIFIED_BOT));

        let poll = message.poll.as_ref().map(|poll| MessagePoll {
            question: poll.question.text.clone().unwrap_or_default(),
            answers: poll
                .answers
                .iter()
                .filter_map(|answer| answer.poll_media.text.clone())
                .collect(),
        });

        Self {
            message_id: message.id.get(),
            author: MessageAuthor {
                id: message.author.id.get(),
                tag: message.author.name.clone(),
                bot: message.author.bot,
                system: message.author.system,
                verified_bot,
            },
            guild_id: message.guild_id.map(|id| id.get()),
            guild_name,
            channel_id: message.channel_id.get(),
            channel_name,
            webhook_id: message.webhook_id.map(|id| id.get()),
            content: message.content.clone(),
            embed_count: message.embeds.len(),
            poll,
            attachments: message
                .attachments
                .iter()
                .map(|attachment| MessageAttachment {
                    url: attachment.url.clone(),
                    filename: attachment.filename.clone(),
                })
                .collect(),
        }
    }

    /// Message text with line breaks collapsed to single spaces.
    pub fn flat_content(&self) -> String {
        collapse_newlines(&self.content)
    }

    /// Single-line description of the message for log output.
    ///
    /// Appends an ` EMBED ` marker when embeds are present and a ` POLL ` marker with
    /// the question and answers when the message carries a poll.
    pub fn describe(&self) -> String {
        let mut description = self.flat_content();

        if self.embed_count > 0 {
            description.push_str(" EMBED ");
        }

        if let Some(poll) = &self.poll {
            description.push_str(&format!(
                " POLL  {} - {} ",
                collapse_newlines(&poll.question),
                poll.answers.join(", ")
            ));
        }

        description
    }

    pub fn guild_label(&self) -> &str {
        self.guild_name.as_deref().unwrap_or(DIRECT_MESSAGE_LABEL)
    }

    pub fn channel_label(&self) -> &str {
        self.channel_name.as_deref().unwrap_or(DIRECT_MESSAGE_LABEL)
    }
}

fn collapse_newlines(text: &str) -> String {
    let mut collapsed = String::with_capacity(text.len());
    let mut in_break = false;

    for c in text.chars() {
        if c == '\r' || c == '\n' {
            if !in_break {
                collapsed.push(' ');
                in_break = true;
            }
        } else {
            collapsed.push(c);
            in_break = false;
        }
    }

    collapsed
}
