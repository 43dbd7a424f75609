use super::*;

/// Tests reading back a stored counter.
///
/// Expected: Ok(Some(counter)) with the written value
#[tokio::test]
async fn returns_stored_counter() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ChannelCounter)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::channel_counter::ChannelCounterFactory::new(db)
        .channel_id("555555555")
        .chance(17)
        .build()
        .await?;

    let repo = ChannelCounterRepository::new(db);
    let counter = repo.get(555555555).await?;

    assert!(counter.is_some());
    let counter = counter.unwrap();
    assert_eq!(counter.channel_id, 555555555);
    assert_eq!(counter.chance, 17);

    Ok(())
}

/// Tests that an uncounted channel returns None.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_uncounted_channel() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ChannelCounter)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ChannelCounterRepository::new(db);

    assert!(repo.get(555555555).await?.is_none());

    Ok(())
}

/// Tests that an increment is immediately visible to a read.
///
/// Expected: Ok(Some(counter)) equal to the value returned by increment
#[tokio::test]
async fn reads_back_incremented_value() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ChannelCounter)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ChannelCounterRepository::new(db);
    let written = repo.increment(555555555, 3).await?;
    let read = repo.get(555555555).await?;

    assert_eq!(read, Some(written));

    Ok(())
}
