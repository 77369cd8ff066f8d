use super::*;
use crate::data::{GuildBanRepository, UserRepository};
use sea_orm::PaginatorTrait;

/// Tests mirroring a live ban list.
///
/// Verifies that a ban row and a user row are created per ban and that
/// `last_ban_sync` is stamped in the database and on the in-memory record.
///
/// Expected: Ok with bans cached and sync stamped
#[tokio::test]
async fn caches_bans_and_stamps_sync() -> Result<(), GuildError> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = &test.db;
    factory::guild::GuildFactory::new(db)
        .guild_id(123456789)
        .build()
        .await?;
    let mut guild = load_guild(db, 123456789).await;

    let source = StaticBanSource::new(vec![live_ban(1001, Some("spam")), live_ban(1002, None)]);
    let (loader, _) = static_loader(VALID_CONFIG);
    GuildService::new(db, &loader)
        .sync_bans(&mut guild, &source)
        .await?;

    let bans = GuildBanRepository::new(db).get_by_guild_id(123456789).await?;
    assert_eq!(bans.len(), 2);
    assert_eq!(bans[0].user_id, 1001);
    assert_eq!(bans[0].reason.as_deref(), Some("spam"));
    assert!(bans[1].reason.is_none());

    assert!(UserRepository::new(db).find_by_user_id(1002).await?.is_some());

    assert!(guild.last_ban_sync.is_some());
    assert!(load_guild(db, 123456789).await.last_ban_sync.is_some());

    Ok(())
}

/// Tests that an already cached ban keeps its original reason.
///
/// Expected: Ok with first reason kept
#[tokio::test]
async fn keeps_reason_of_cached_ban() -> Result<(), GuildError> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = &test.db;
    factory::guild::GuildFactory::new(db)
        .guild_id(123456789)
        .build()
        .await?;
    factory::guild_ban::GuildBanFactory::new(db, 123456789)
        .user_id(1001)
        .reason(Some("original"))
        .build()
        .await?;
    let mut guild = load_guild(db, 123456789).await;

    let source = StaticBanSource::new(vec![live_ban(1001, Some("updated"))]);
    let (loader, _) = static_loader(VALID_CONFIG);
    GuildService::new(db, &loader)
        .sync_bans(&mut guild, &source)
        .await?;

    let ban = GuildBanRepository::new(db).find(123456789, 1001).await?.unwrap();
    assert_eq!(ban.reason.as_deref(), Some("original"));

    Ok(())
}

/// Tests a ban fetch that fails.
///
/// Verifies that the failure is swallowed and nothing is written: no ban rows, no
/// user rows and no `last_ban_sync` stamp.
///
/// Expected: Ok with no writes
#[tokio::test]
async fn swallows_fetch_failure_without_writes() -> Result<(), GuildError> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = &test.db;
    factory::guild::GuildFactory::new(db)
        .guild_id(123456789)
        .build()
        .await?;
    let mut guild = load_guild(db, 123456789).await;

    let (loader, _) = static_loader(VALID_CONFIG);
    let result = GuildService::new(db, &loader)
        .sync_bans(&mut guild, &FailingBanSource)
        .await;

    assert!(result.is_ok());
    assert!(guild.last_ban_sync.is_none());
    assert!(load_guild(db, 123456789).await.last_ban_sync.is_none());
    assert_eq!(entity::prelude::GuildBan::find().count(db).await?, 0);
    assert_eq!(entity::prelude::User::find().count(db).await?, 0);

    Ok(())
}

/// Tests syncing an empty ban list.
///
/// Expected: Ok with sync stamped
#[tokio::test]
async fn stamps_sync_for_empty_ban_list() -> Result<(), GuildError> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = &test.db;
    factory::guild::GuildFactory::new(db)
        .guild_id(123456789)
        .build()
        .await?;
    let mut guild = load_guild(db, 123456789).await;

    let (loader, _) = static_loader(VALID_CONFIG);
    GuildService::new(db, &loader)
        .sync_bans(&mut guild, &StaticBanSource::new(Vec::new()))
        .await?;

    assert!(guild.last_ban_sync.is_some());
    assert_eq!(entity::prelude::GuildBan::find().count(db).await?, 0);

    Ok(())
}
