//! Reply cooldown factory for pausing replies in a channel.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating cooldown rows with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::reply_cooldown::ReplyCooldownFactory;
///
/// let cooldown = ReplyCooldownFactory::new(&db)
///     .guild_id("1")
///     .channel_id("2")
///     .expires_in(chrono::Duration::minutes(5))
///     .build()
///     .await?;
/// ```
pub struct ReplyCooldownFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    channel_id: String,
    expires_at: i64,
}

impl<'a> ReplyCooldownFactory<'a> {
    /// Creates a new ReplyCooldownFactory with default values.
    ///
    /// Defaults:
    /// - guild_id / channel_id: auto-incremented snowflakes
    /// - expires_at: ten minutes from now
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            guild_id: next_id().to_string(),
            channel_id: next_id().to_string(),
            expires_at: (Utc::now() + chrono::Duration::minutes(10)).timestamp_millis(),
        }
    }

    pub fn guild_id(mut self, guild_id: impl Into<String>) -> Self {
        self.guild_id = guild_id.into();
        self
    }

    pub fn channel_id(mut self, channel_id: impl Into<String>) -> Self {
        self.channel_id = channel_id.into();
        self
    }

    /// Sets the absolute expiry in epoch milliseconds.
    pub fn expires_at(mut self, expires_at: i64) -> Self {
        self.expires_at = expires_at;
        self
    }

    /// Sets the expiry relative to the current time.
    pub fn expires_in(mut self, duration: chrono::Duration) -> Self {
        self.expires_at = (Utc::now() + duration).timestamp_millis();
        self
    }

    /// Builds and inserts the cooldown entity into the database.
    pub async fn build(self) -> Result<entity::reply_cooldown::Model, DbErr> {
        entity::reply_cooldown::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            channel_id: ActiveValue::Set(self.channel_id),
            expires_at: ActiveValue::Set(self.expires_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a cooldown row with default values.
pub async fn create_reply_cooldown(
    db: &DatabaseConnection,
) -> Result<entity::reply_cooldown::Model, DbErr> {
    ReplyCooldownFactory::new(db).build().await
}
