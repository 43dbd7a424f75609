//! Per-channel reply chance counters.

use sea_orm::DbErr;

use crate::util::parse::parse_snowflake;

/// Accumulated engagement pressure for a channel, read as a reply percentage.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelCounter {
    pub channel_id: u64,
    pub chance: i64,
}

impl ChannelCounter {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(ChannelCounter)` - Successfully converted domain model
    /// - `Err(DbErr::Custom)` - Failed to parse channel_id as u64
    pub fn from_entity(entity: entity::channel_counter::Model) -> Result<Self, DbErr> {
        Ok(Self {
            channel_id: parse_snowflake("channel_id", &entity.channel_id)?,
            chance: entity.chance,
        })
    }
}
