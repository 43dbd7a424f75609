//! Message origin classification.
//!
//! Every event is classified exactly once, before any other processing, and the
//! resulting category is passed downstream.

use std::fmt;

use crate::model::message::MessageEvent;

/// Origin of an inbound message. Exactly one category applies to every message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageCategory {
    /// Posted by a Discord system account.
    System,
    /// Posted by an automated account without the verified flag.
    Application,
    /// Posted by a verified automated account.
    VerifiedApplication,
    /// Posted through a webhook.
    Webhook,
    /// Direct message with no guild context.
    Direct,
    /// Regular guild message.
    Guild,
}

impl MessageCategory {
    /// Classifies a message by origin; the first matching rule wins.
    ///
    /// Precedence: system account, unverified automated account, verified automated
    /// account, webhook, direct message, guild message.
    pub fn classify(event: &MessageEvent) -> Self {
        if event.author.system {
            Self::System
        } else if event.author.bot && !event.author.verified_bot {
            Self::Application
        } else if event.author.verified_bot {
            Self::VerifiedApplication
        } else if event.webhook_id.is_some() {
            Self::Webhook
        } else if event.guild_id.is_none() {
            Self::Direct
        } else {
            Self::Guild
        }
    }

    /// Log label for the category.
    pub fn label(self) -> &'static str {
        match self {
            Self::System => "SYSTEM",
            Self::Application => "APP",
            Self::VerifiedApplication => "✓ APP",
            Self::Webhook => "WEBHOOK",
            Self::Direct => "DM",
            Self::Guild => "GUILD",
        }
    }

    /// Whether messages of this origin may receive an autonomous reply.
    pub fn is_reply_eligible(self) -> bool {
        matches!(
            self,
            Self::VerifiedApplication | Self::Direct | Self::Guild
        )
    }
}

impl fmt::Display for MessageCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
