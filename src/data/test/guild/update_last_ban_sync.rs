use super::*;

/// Tests stamping the last ban sync time.
///
/// Expected: Ok with timestamp stored
#[tokio::test]
async fn stamps_last_ban_sync() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = &test.db;

    let old_sync = Utc::now() - chrono::Duration::hours(2);
    let created = factory::guild::GuildFactory::new(db)
        .last_ban_sync(Some(old_sync))
        .build()
        .await?;

    let synced_at = Utc::now();
    GuildRepository::new(db)
        .update_last_ban_sync(created.guild_id as u64, synced_at)
        .await?;

    let db_guild = entity::prelude::Guild::find_by_id(created.guild_id)
        .one(db)
        .await?
        .unwrap();
    let stored = db_guild.last_ban_sync.unwrap();
    assert!(stored > old_sync);
    assert!((stored - synced_at).num_seconds().abs() < 1);

    Ok(())
}
