//! Channel counter factory for seeding reply chance.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating channel counter rows with customizable fields.
pub struct ChannelCounterFactory<'a> {
    db: &'a DatabaseConnection,
    channel_id: String,
    chance: i64,
}

impl<'a> ChannelCounterFactory<'a> {
    /// Creates a new ChannelCounterFactory with default values.
    ///
    /// Defaults:
    /// - channel_id: auto-incremented snowflake
    /// - chance: `0`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            channel_id: next_id().to_string(),
            chance: 0,
        }
    }

    pub fn channel_id(mut self, channel_id: impl Into<String>) -> Self {
        self.channel_id = channel_id.into();
        self
    }

    pub fn chance(mut self, chance: i64) -> Self {
        self.chance = chance;
        self
    }

    /// Builds and inserts the counter entity into the database.
    pub async fn build(self) -> Result<entity::channel_counter::Model, DbErr> {
        entity::channel_counter::ActiveModel {
            channel_id: ActiveValue::Set(self.channel_id),
            chance: ActiveValue::Set(self.chance),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a channel counter with default values.
pub async fn create_channel_counter(
    db: &DatabaseConnection,
) -> Result<entity::channel_counter::Model, DbErr> {
    ChannelCounterFactory::new(db).build().await
}
