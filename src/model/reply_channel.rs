//! Per-guild reply policy.

use sea_orm::DbErr;

use crate::util::parse::parse_snowflake;

/// A channel configured to receive autonomous replies.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplyChannelConfig {
    pub channel_id: u64,
    pub guild_id: u64,
}

impl ReplyChannelConfig {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::reply_channel::Model) -> Result<Self, DbErr> {
        Ok(Self {
            channel_id: parse_snowflake("channel_id", &entity.channel_id)?,
            guild_id: parse_snowflake("guild_id", &entity.guild_id)?,
        })
    }
}

/// A configured reply channel together with its current chance counter.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplyChannel {
    pub channel_id: u64,
    /// Current counter value; `0` when the channel has never been counted.
    pub chance: i64,
}

/// Reply settings for one guild.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GuildSettings {
    pub reply_channels: Vec<ReplyChannel>,
}

impl GuildSettings {
    /// Finds the reply policy for a channel, if it has one.
    pub fn reply_channel(&self, channel_id: u64) -> Option<&ReplyChannel> {
        self.reply_channels
            .iter()
            .find(|channel| channel.channel_id == channel_id)
    }
}
