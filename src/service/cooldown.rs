//! Cooldown gate.
//!
//! Computes how long autonomous replies in a channel remain paused. A channel with
//! no cooldown record, or whose record has expired, has zero remaining time.

use std::time::Duration;

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::data::reply_cooldown::ReplyCooldownRepository;

pub struct CooldownGate<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CooldownGate<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Remaining cooldown for a channel at `now`.
    ///
    /// Never fails: a storage error is logged and treated as no cooldown.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    /// - `channel_id` - Discord channel ID
    /// - `now` - Current wall clock time
    pub async fn remaining(&self, guild_id: u64, channel_id: u64, now: DateTime<Utc>) -> Duration {
        let expiry = match ReplyCooldownRepository::new(self.db)
            .get(guild_id, channel_id)
            .await
        {
            Ok(cooldown) => cooldown.map(|cooldown| cooldown.expires_at),
            Err(e) => {
                tracing::error!(
                    "Error fetching cooldown time for channel {} in guild {}: {}",
                    channel_id,
                    guild_id,
                    e
                );
                None
            }
        };

        remaining_until(expiry, now)
    }
}

/// `max(0, expiry - now)`, with a missing expiry meaning zero.
pub fn remaining_until(expiry: Option<DateTime<Utc>>, now: DateTime<Utc>) -> Duration {
    expiry
        .and_then(|expiry| (expiry - now).to_std().ok())
        .unwrap_or(Duration::ZERO)
}

/// Whole minutes left, rounded up, for display.
pub fn minutes_remaining(remaining: Duration) -> u64 {
    remaining.as_millis().div_ceil(60_000) as u64
}
