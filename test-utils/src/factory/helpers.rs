//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Values are offset into the snowflake range so they parse as realistic Discord IDs.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    100_000_000_000_000_000 + COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a reply channel in a fresh guild along with its chance counter.
///
/// # Arguments
/// - `db` - Database connection
/// - `chance` - Initial counter value for the channel
///
/// # Returns
/// - `Ok((reply_channel, channel_counter))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_reply_channel_with_counter(
    db: &DatabaseConnection,
    chance: i64,
) -> Result<
    (
        entity::reply_channel::Model,
        entity::channel_counter::Model,
    ),
    DbErr,
> {
    let channel = crate::factory::reply_channel::create_reply_channel(db).await?;
    let counter = crate::factory::channel_counter::ChannelCounterFactory::new(db)
        .channel_id(channel.channel_id.clone())
        .chance(chance)
        .build()
        .await?;

    Ok((channel, counter))
}
