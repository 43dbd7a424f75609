use super::*;

/// Tests fetching counters for a set of channels.
///
/// Expected: Ok with counters for the requested channels only
#[tokio::test]
async fn returns_requested_counters() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ChannelCounter)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for (channel_id, chance) in [("1", 5), ("2", 10), ("3", 15)] {
        factory::channel_counter::ChannelCounterFactory::new(db)
            .channel_id(channel_id)
            .chance(chance)
            .build()
            .await?;
    }

    let repo = ChannelCounterRepository::new(db);
    let mut counters = repo.get_many(&[1, 3, 4]).await?;
    counters.sort_by_key(|counter| counter.channel_id);

    assert_eq!(counters.len(), 2);
    assert_eq!((counters[0].channel_id, counters[0].chance), (1, 5));
    assert_eq!((counters[1].channel_id, counters[1].chance), (3, 15));

    Ok(())
}

/// Tests that an empty request does not query.
///
/// Expected: Ok(empty) even without the table
#[tokio::test]
async fn returns_empty_for_empty_request() -> Result<(), AppError> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ChannelCounterRepository::new(db);

    assert!(repo.get_many(&[]).await?.is_empty());

    Ok(())
}
