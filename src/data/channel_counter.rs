//! Channel counter repository.
//!
//! Holds the reply chance for each channel. The counter only ever grows through
//! `increment`; resets happen through configuration outside the pipeline.

use sea_orm::{
    sea_query::{Expr, ExprTrait, OnConflict},
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
};

use crate::model::channel_counter::ChannelCounter;

pub struct ChannelCounterRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ChannelCounterRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the counter for a channel.
    ///
    /// # Returns
    /// - `Ok(Some(ChannelCounter))` - The channel has been counted before
    /// - `Ok(None)` - No counter exists for the channel
    /// - `Err(DbErr)` - Database error during query or entity conversion failure
    pub async fn get(&self, channel_id: u64) -> Result<Option<ChannelCounter>, DbErr> {
        let entity = entity::prelude::ChannelCounter::find_by_id(channel_id.to_string())
            .one(self.db)
            .await?;

        entity.map(ChannelCounter::from_entity).transpose()
    }

    /// Gets the counters for several channels at once.
    ///
    /// Channels without a counter are absent from the result.
    pub async fn get_many(&self, channel_ids: &[u64]) -> Result<Vec<ChannelCounter>, DbErr> {
        if channel_ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::ChannelCounter::find()
            .filter(
                entity::channel_counter::Column::ChannelId
                    .is_in(channel_ids.iter().map(|id| id.to_string())),
            )
            .all(self.db)
            .await?;

        entities
            .into_iter()
            .map(ChannelCounter::from_entity)
            .collect()
    }

    /// Atomically adds `delta` to a channel's counter.
    ///
    /// Runs as a single `INSERT .. ON CONFLICT DO UPDATE .. RETURNING` statement, so
    /// concurrent increments on the same channel are serialized by the database and
    /// none are lost. A channel without a counter starts at `delta`. On failure the
    /// stored value is unchanged.
    ///
    /// # Arguments
    /// - `channel_id` - Discord channel ID
    /// - `delta` - Amount to add
    ///
    /// # Returns
    /// - `Ok(ChannelCounter)` - The counter after the increment
    /// - `Err(DbErr)` - Database error during the upsert
    pub async fn increment(&self, channel_id: u64, delta: i64) -> Result<ChannelCounter, DbErr> {
        let entity = entity::prelude::ChannelCounter::insert(
            entity::channel_counter::ActiveModel {
                channel_id: ActiveValue::Set(channel_id.to_string()),
                chance: ActiveValue::Set(delta),
            },
        )
        .on_conflict(
            OnConflict::column(entity::channel_counter::Column::ChannelId)
                .value(
                    entity::channel_counter::Column::Chance,
                    Expr::col((
                        entity::prelude::ChannelCounter,
                        entity::channel_counter::Column::Chance,
                    ))
                    .add(delta),
                )
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        ChannelCounter::from_entity(entity)
    }
}
