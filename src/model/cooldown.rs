//! Channel reply cooldown windows.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::util::parse::parse_snowflake;

/// A pause on autonomous replies in one channel until `expires_at`.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplyCooldown {
    pub guild_id: u64,
    pub channel_id: u64,
    pub expires_at: DateTime<Utc>,
}

impl ReplyCooldown {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// The stored expiry is epoch milliseconds.
    ///
    /// # Returns
    /// - `Ok(ReplyCooldown)` - Successfully converted domain model
    /// - `Err(DbErr::Custom)` - Unparseable IDs or an out-of-range timestamp
    pub fn from_entity(entity: entity::reply_cooldown::Model) -> Result<Self, DbErr> {
        let expires_at = DateTime::from_timestamp_millis(entity.expires_at).ok_or_else(|| {
            DbErr::Custom(format!(
                "Cooldown expiry {} is out of range",
                entity.expires_at
            ))
        })?;

        Ok(Self {
            guild_id: parse_snowflake("guild_id", &entity.guild_id)?,
            channel_id: parse_snowflake("channel_id", &entity.channel_id)?,
            expires_at,
        })
    }
}
