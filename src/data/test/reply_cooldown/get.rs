use super::*;

/// Tests retrieving a cooldown record for a channel.
///
/// Expected: Ok(Some(cooldown)) with the stored expiry
#[tokio::test]
async fn returns_cooldown_for_channel() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ReplyCooldown)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let expires_at = 1_900_000_000_000i64;
    factory::reply_cooldown::ReplyCooldownFactory::new(db)
        .guild_id("111111111")
        .channel_id("222222222")
        .expires_at(expires_at)
        .build()
        .await?;

    let repo = ReplyCooldownRepository::new(db);
    let result = repo.get(111111111, 222222222).await;

    assert!(result.is_ok());
    let cooldown = result.unwrap();
    assert!(cooldown.is_some());
    let cooldown = cooldown.unwrap();
    assert_eq!(cooldown.guild_id, 111111111);
    assert_eq!(cooldown.channel_id, 222222222);
    assert_eq!(cooldown.expires_at.timestamp_millis(), expires_at);

    Ok(())
}

/// Tests that a channel without a record returns None.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_without_record() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ReplyCooldown)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ReplyCooldownRepository::new(db);
    let result = repo.get(111111111, 222222222).await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests that records are keyed by guild and channel together.
///
/// Verifies that the same channel ID under a different guild does not match.
///
/// Expected: Ok(None) for the other guild
#[tokio::test]
async fn keys_by_guild_and_channel() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ReplyCooldown)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::reply_cooldown::ReplyCooldownFactory::new(db)
        .guild_id("111111111")
        .channel_id("222222222")
        .build()
        .await?;

    let repo = ReplyCooldownRepository::new(db);

    assert!(repo.get(111111111, 222222222).await?.is_some());
    assert!(repo.get(333333333, 222222222).await?.is_none());
    assert!(repo.get(111111111, 444444444).await?.is_none());

    Ok(())
}
