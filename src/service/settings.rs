//! Guild reply settings.

use std::collections::HashMap;

use sea_orm::{DatabaseConnection, DbErr};

use crate::{
    data::{channel_counter::ChannelCounterRepository, reply_channel::ReplyChannelRepository},
    model::reply_channel::{GuildSettings, ReplyChannel},
};

/// Reads per-guild reply policy: which channels reply, and their current chance.
pub struct SettingsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SettingsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the reply settings for a guild.
    ///
    /// Joins the configured reply channels with their counters; a channel that has
    /// never been counted reports a chance of `0`.
    ///
    /// # Returns
    /// - `Ok(GuildSettings)` - Settings (empty when the guild has none)
    /// - `Err(DbErr)` - Database error reading either table
    pub async fn get_settings(&self, guild_id: u64) -> Result<GuildSettings, DbErr> {
        let configs = ReplyChannelRepository::new(self.db)
            .get_by_guild_id(guild_id)
            .await?;

        let channel_ids: Vec<u64> = configs.iter().map(|config| config.channel_id).collect();
        let counters: HashMap<u64, i64> = ChannelCounterRepository::new(self.db)
            .get_many(&channel_ids)
            .await?
            .into_iter()
            .map(|counter| (counter.channel_id, counter.chance))
            .collect();

        Ok(GuildSettings {
            reply_channels: configs
                .into_iter()
                .map(|config| ReplyChannel {
                    channel_id: config.channel_id,
                    chance: counters.get(&config.channel_id).copied().unwrap_or(0),
                })
                .collect(),
        })
    }
}
