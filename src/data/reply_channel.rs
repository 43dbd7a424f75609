use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

use crate::model::reply_channel::ReplyChannelConfig;

/// Repository for the channels each guild has configured for autonomous replies.
pub struct ReplyChannelRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReplyChannelRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves all reply channels configured for a guild.
    ///
    /// # Returns
    /// - `Ok(Vec<ReplyChannelConfig>)` - Configured channels (empty when none)
    /// - `Err(DbErr)` - Database error during query or entity conversion failure
    pub async fn get_by_guild_id(&self, guild_id: u64) -> Result<Vec<ReplyChannelConfig>, DbErr> {
        let entities = entity::prelude::ReplyChannel::find()
            .filter(entity::reply_channel::Column::GuildId.eq(guild_id.to_string()))
            .all(self.db)
            .await?;

        entities
            .into_iter()
            .map(ReplyChannelConfig::from_entity)
            .collect()
    }
}
