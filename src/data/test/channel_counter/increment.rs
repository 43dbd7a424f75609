use super::*;
use tokio::task::JoinSet;

/// Tests the first increment of an uncounted channel.
///
/// Expected: Ok with chance equal to the step
#[tokio::test]
async fn creates_counter_at_step() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ChannelCounter)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ChannelCounterRepository::new(db);
    let counter = repo.increment(555555555, 1).await?;

    assert_eq!(counter.channel_id, 555555555);
    assert_eq!(counter.chance, 1);

    Ok(())
}

/// Tests incrementing an existing counter.
///
/// Expected: Ok with chance equal to previous value plus delta
#[tokio::test]
async fn adds_to_existing_counter() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ChannelCounter)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::channel_counter::ChannelCounterFactory::new(db)
        .channel_id("555555555")
        .chance(41)
        .build()
        .await?;

    let repo = ChannelCounterRepository::new(db);
    let counter = repo.increment(555555555, 1).await?;

    assert_eq!(counter.chance, 42);

    Ok(())
}

/// Tests that increments on one channel leave other channels untouched.
///
/// Expected: other channel keeps its value
#[tokio::test]
async fn leaves_other_channels_untouched() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ChannelCounter)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::channel_counter::ChannelCounterFactory::new(db)
        .channel_id("2")
        .chance(7)
        .build()
        .await?;

    let repo = ChannelCounterRepository::new(db);
    repo.increment(1, 1).await?;
    repo.increment(1, 1).await?;

    assert_eq!(repo.get(1).await?.unwrap().chance, 2);
    assert_eq!(repo.get(2).await?.unwrap().chance, 7);

    Ok(())
}

/// Tests that concurrent increments on the same channel are not lost.
///
/// Spawns many tasks incrementing one channel in parallel.
///
/// Expected: final chance equals initial + tasks * step
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_increments_are_not_lost() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ChannelCounter)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let initial = 10;
    let tasks = 50;
    factory::channel_counter::ChannelCounterFactory::new(db)
        .channel_id("555555555")
        .chance(initial)
        .build()
        .await?;

    let mut set = JoinSet::new();
    for _ in 0..tasks {
        let db = db.clone();
        set.spawn(async move {
            ChannelCounterRepository::new(&db)
                .increment(555555555, 1)
                .await
        });
    }

    while let Some(result) = set.join_next().await {
        result.unwrap()?;
    }

    let repo = ChannelCounterRepository::new(db);
    assert_eq!(repo.get(555555555).await?.unwrap().chance, initial + tasks);

    Ok(())
}

/// Tests that a failed increment reports an error.
///
/// Expected: Err(DbErr) when the table does not exist
#[tokio::test]
async fn fails_when_table_missing() -> Result<(), AppError> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ChannelCounterRepository::new(db);

    assert!(repo.increment(555555555, 1).await.is_err());

    Ok(())
}
