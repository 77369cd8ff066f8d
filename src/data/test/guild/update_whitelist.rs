use super::*;

/// Tests replacing the whitelist.
///
/// Verifies that flags are stored in their snake_case form.
///
/// Expected: Ok with flags stored
#[tokio::test]
async fn stores_whitelist_flags() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = &test.db;

    let created = factory::guild::GuildFactory::new(db)
        .whitelist(json!(["music"]))
        .build()
        .await?;

    GuildRepository::new(db)
        .update_whitelist(
            created.guild_id as u64,
            &[WhitelistFlag::ModlogCustomFormat],
        )
        .await?;

    let db_guild = entity::prelude::Guild::find_by_id(created.guild_id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(db_guild.whitelist, json!(["modlog_custom_format"]));

    Ok(())
}

/// Tests clearing the whitelist.
///
/// Expected: Ok with empty list stored
#[tokio::test]
async fn clears_whitelist() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = &test.db;

    let created = factory::guild::GuildFactory::new(db)
        .whitelist(json!(["music", "modlog_custom_format"]))
        .build()
        .await?;

    GuildRepository::new(db)
        .update_whitelist(created.guild_id as u64, &[])
        .await?;

    let guild = GuildRepository::new(db)
        .find_by_guild_id(created.guild_id as u64)
        .await?
        .unwrap();
    assert!(guild.whitelist.is_empty());

    Ok(())
}
