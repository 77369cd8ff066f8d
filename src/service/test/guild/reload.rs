use super::*;

/// Tests reloading a guild's config from its stored URL.
///
/// Verifies that the freshly fetched document replaces the stored one in both the
/// database and the in-memory record, and that the cached config is dropped.
///
/// Expected: Ok with new config persisted and cache cleared
#[tokio::test]
async fn replaces_config_and_clears_cache() -> Result<(), GuildError> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = &test.db;
    factory::guild::GuildFactory::new(db)
        .guild_id(123456789)
        .config(Some(serde_json::json!({ "nickname": "old" })))
        .build()
        .await?;
    let mut guild = load_guild(db, 123456789).await;

    let (loader, source) = static_loader("nickname: new\n");
    let service = GuildService::new(db, &loader);
    service.get_config(&mut guild).await?;
    assert!(guild.cached_config().is_some());

    service.reload(&mut guild).await?;

    assert_eq!(source.calls(), 1);
    assert!(guild.cached_config().is_none());
    assert_eq!(guild.config(), Some(&serde_json::json!({ "nickname": "new" })));
    assert_eq!(
        load_guild(db, 123456789).await.config(),
        Some(&serde_json::json!({ "nickname": "new" }))
    );

    Ok(())
}

/// Tests a reload whose fetched document fails validation.
///
/// Verifies that neither the stored document nor the cached config change.
///
/// Expected: Err(Validation)
#[tokio::test]
async fn keeps_stored_config_on_failure() -> Result<(), GuildError> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = &test.db;
    factory::guild::GuildFactory::new(db)
        .guild_id(123456789)
        .config(Some(serde_json::json!({ "nickname": "old" })))
        .build()
        .await?;
    let mut guild = load_guild(db, 123456789).await;

    let (loader, _) = static_loader("levels:\n  111: 101\n");
    let service = GuildService::new(db, &loader);
    let cached = service.get_config(&mut guild).await?;

    let result = service.reload(&mut guild).await;

    assert!(matches!(result, Err(GuildError::Validation(_))));
    assert!(Arc::ptr_eq(&cached, guild.cached_config().unwrap()));
    assert_eq!(
        load_guild(db, 123456789).await.config(),
        Some(&serde_json::json!({ "nickname": "old" }))
    );

    Ok(())
}

/// Tests that the config after a reload is built from the new document.
///
/// Expected: Ok with a new Arc holding the new config
#[tokio::test]
async fn next_get_config_uses_new_document() -> Result<(), GuildError> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = &test.db;
    factory::guild::GuildFactory::new(db)
        .guild_id(123456789)
        .config(Some(serde_json::json!({ "nickname": "old" })))
        .build()
        .await?;
    let mut guild = load_guild(db, 123456789).await;

    let (loader, source) = static_loader("nickname: new\n");
    let service = GuildService::new(db, &loader);
    let before = service.get_config(&mut guild).await?;

    service.reload(&mut guild).await?;
    source.set_body("nickname: newer\n");
    let after = service.get_config(&mut guild).await?;

    assert!(!Arc::ptr_eq(&before, &after));
    assert_eq!(before.nickname.as_deref(), Some("old"));
    assert_eq!(after.nickname.as_deref(), Some("new"));
    assert_eq!(source.calls(), 1);

    Ok(())
}
