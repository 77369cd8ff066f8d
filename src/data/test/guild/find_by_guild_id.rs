use super::*;

/// Tests finding an existing guild.
///
/// Expected: Ok(Some) with whitelist parsed into flags
#[tokio::test]
async fn finds_existing_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = &test.db;

    factory::guild::GuildFactory::new(db)
        .guild_id(123456789)
        .name(Some("Test Guild"))
        .whitelist(json!(["music"]))
        .build()
        .await?;

    let guild = GuildRepository::new(db)
        .find_by_guild_id(123456789)
        .await?
        .unwrap();

    assert_eq!(guild.guild_id, 123456789);
    assert_eq!(guild.name.as_deref(), Some("Test Guild"));
    assert_eq!(guild.whitelist, vec![WhitelistFlag::Music]);

    Ok(())
}

/// Tests finding a guild with no record.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = &test.db;

    factory::create_guild(db).await?;

    let result = GuildRepository::new(db).find_by_guild_id(999).await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests finding a guild whose stored whitelist holds an unknown flag.
///
/// Expected: Err(DbErr::Custom)
#[tokio::test]
async fn fails_for_malformed_whitelist() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = &test.db;

    factory::guild::GuildFactory::new(db)
        .guild_id(123456789)
        .whitelist(json!(["not_a_flag"]))
        .build()
        .await?;

    let result = GuildRepository::new(db).find_by_guild_id(123456789).await;

    assert!(matches!(result, Err(DbErr::Custom(_))));

    Ok(())
}
