//! Outcome types of the engagement decision.

use std::time::Duration;

use crate::model::category::MessageCategory;

/// Why an eligible message did not fire the reply trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuppressReason {
    /// The origin never receives autonomous replies.
    Origin(MessageCategory),
    /// The channel has no reply policy in the guild settings.
    NoReplyPolicy,
    /// The channel is inside an administrative cooldown window.
    Cooldown(Duration),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Reply,
    Suppress(SuppressReason),
}

/// Result of running the decision procedure for one message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Engagement {
    /// Channel chance after this message; `0` when the channel has no reply policy.
    pub chance: i64,
    pub decision: Decision,
}

impl Engagement {
    pub fn should_reply(&self) -> bool {
        self.decision == Decision::Reply
    }
}

/// Request handed to the external reply generator.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplyRequest {
    pub guild_id: u64,
    pub channel_id: u64,
    pub message_id: u64,
    pub author_tag: String,
    pub chance: i64,
}
