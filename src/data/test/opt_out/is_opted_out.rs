use super::*;

/// Tests membership of an opted-out tag.
///
/// Expected: Ok(true)
#[tokio::test]
async fn returns_true_for_opted_out_tag() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::OptOut)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::opt_out::OptOutFactory::new(db)
        .user_tag("quiet_user")
        .build()
        .await?;

    let repo = OptOutRepository::new(db);
    let result = repo.is_opted_out("quiet_user").await;

    assert!(result.is_ok());
    assert!(result.unwrap());

    Ok(())
}

/// Tests that unknown tags are not members.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_tag() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::OptOut)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_opt_out(db).await?;

    let repo = OptOutRepository::new(db);
    let result = repo.is_opted_out("someone_else").await?;

    assert!(!result);

    Ok(())
}

/// Tests that matching is exact, including case.
///
/// Expected: Ok(false) for a differently cased tag
#[tokio::test]
async fn matches_tag_exactly() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::OptOut)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::opt_out::OptOutFactory::new(db)
        .user_tag("quiet_user")
        .build()
        .await?;

    let repo = OptOutRepository::new(db);

    assert!(!repo.is_opted_out("Quiet_User").await?);
    assert!(!repo.is_opted_out("quiet").await?);

    Ok(())
}

/// Tests that repeated lookups are stable and unaffected by writes to other tables.
///
/// Expected: Ok(true) before and after counter and cooldown writes
#[tokio::test]
async fn lookup_is_unaffected_by_other_tables() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_engagement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::opt_out::OptOutFactory::new(db)
        .user_tag("quiet_user")
        .build()
        .await?;

    let repo = OptOutRepository::new(db);
    assert!(repo.is_opted_out("quiet_user").await?);
    assert!(repo.is_opted_out("quiet_user").await?);

    crate::data::channel_counter::ChannelCounterRepository::new(db)
        .increment(123456789, 1)
        .await?;
    factory::create_reply_cooldown(db).await?;

    assert!(repo.is_opted_out("quiet_user").await?);
    assert!(!repo.is_opted_out("someone_else").await?);

    Ok(())
}

/// Tests that a missing table surfaces as an error rather than a default.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn fails_when_table_missing() -> Result<(), AppError> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = OptOutRepository::new(db);
    let result = repo.is_opted_out("quiet_user").await;

    assert!(result.is_err());

    Ok(())
}
