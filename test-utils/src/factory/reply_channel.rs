//! Reply channel factory for configuring channels that receive autonomous replies.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating reply channel rows with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::reply_channel::ReplyChannelFactory;
///
/// let channel = ReplyChannelFactory::new(&db)
///     .guild_id("1")
///     .channel_id("2")
///     .build()
///     .await?;
/// ```
pub struct ReplyChannelFactory<'a> {
    db: &'a DatabaseConnection,
    channel_id: String,
    guild_id: String,
}

impl<'a> ReplyChannelFactory<'a> {
    /// Creates a new ReplyChannelFactory with default values.
    ///
    /// Defaults:
    /// - channel_id / guild_id: auto-incremented snowflakes
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            channel_id: next_id().to_string(),
            guild_id: next_id().to_string(),
        }
    }

    pub fn channel_id(mut self, channel_id: impl Into<String>) -> Self {
        self.channel_id = channel_id.into();
        self
    }

    pub fn guild_id(mut self, guild_id: impl Into<String>) -> Self {
        self.guild_id = guild_id.into();
        self
    }

    /// Builds and inserts the reply channel entity into the database.
    pub async fn build(self) -> Result<entity::reply_channel::Model, DbErr> {
        entity::reply_channel::ActiveModel {
            channel_id: ActiveValue::Set(self.channel_id),
            guild_id: ActiveValue::Set(self.guild_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a reply channel with default values.
pub async fn create_reply_channel(
    db: &DatabaseConnection,
) -> Result<entity::reply_channel::Model, DbErr> {
    ReplyChannelFactory::new(db).build().await
}
