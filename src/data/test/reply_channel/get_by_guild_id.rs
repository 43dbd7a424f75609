use super::*;

/// Tests retrieving the reply channels of a guild.
///
/// Expected: Ok with only the channels belonging to the queried guild
#[tokio::test]
async fn returns_channels_for_guild() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ReplyChannel)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::reply_channel::ReplyChannelFactory::new(db)
        .guild_id("111111111")
        .channel_id("1")
        .build()
        .await?;
    factory::reply_channel::ReplyChannelFactory::new(db)
        .guild_id("111111111")
        .channel_id("2")
        .build()
        .await?;
    factory::reply_channel::ReplyChannelFactory::new(db)
        .guild_id("999999999")
        .channel_id("3")
        .build()
        .await?;

    let repo = ReplyChannelRepository::new(db);
    let mut channels = repo.get_by_guild_id(111111111).await?;
    channels.sort_by_key(|channel| channel.channel_id);

    assert_eq!(channels.len(), 2);
    assert_eq!(channels[0].channel_id, 1);
    assert_eq!(channels[1].channel_id, 2);
    assert!(channels.iter().all(|channel| channel.guild_id == 111111111));

    Ok(())
}

/// Tests that a guild without configuration returns an empty list.
///
/// Expected: Ok(empty)
#[tokio::test]
async fn returns_empty_for_unconfigured_guild() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ReplyChannel)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_reply_channel(db).await?;

    let repo = ReplyChannelRepository::new(db);
    let channels = repo.get_by_guild_id(123).await?;

    assert!(channels.is_empty());

    Ok(())
}

/// Tests that a corrupt snowflake surfaces as a conversion error.
///
/// Expected: Err(DbErr::Custom)
#[tokio::test]
async fn fails_on_unparseable_channel_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ReplyChannel)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::reply_channel::ReplyChannelFactory::new(db)
        .guild_id("111111111")
        .channel_id("general")
        .build()
        .await?;

    let repo = ReplyChannelRepository::new(db);
    let result = repo.get_by_guild_id(111111111).await;

    assert!(matches!(result, Err(sea_orm::DbErr::Custom(_))));

    Ok(())
}
