use sea_orm::{DatabaseConnection, DbErr, EntityTrait};

use crate::model::cooldown::ReplyCooldown;

/// Repository for channel cooldown windows.
///
/// Cooldowns are written by the pause command; the pipeline only reads them.
pub struct ReplyCooldownRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReplyCooldownRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the cooldown record for a channel.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    /// - `channel_id` - Discord channel ID
    ///
    /// # Returns
    /// - `Ok(Some(ReplyCooldown))` - A cooldown record exists (it may already be expired)
    /// - `Ok(None)` - No cooldown has ever been set for the channel
    /// - `Err(DbErr)` - Database error during query or entity conversion failure
    pub async fn get(
        &self,
        guild_id: u64,
        channel_id: u64,
    ) -> Result<Option<ReplyCooldown>, DbErr> {
        let entity = entity::prelude::ReplyCooldown::find_by_id((
            guild_id.to_string(),
            channel_id.to_string(),
        ))
        .one(self.db)
        .await?;

        entity.map(ReplyCooldown::from_entity).transpose()
    }
}
