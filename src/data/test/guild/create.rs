use super::*;

fn live_guild() -> LiveGuild {
    LiveGuild {
        id: 123456789,
        owner_id: Some(42),
        name: Some("Test Guild".to_string()),
        icon: Some("abc".to_string()),
        splash: None,
        region: None,
    }
}

/// Tests inserting a new guild record.
///
/// Verifies that mirror fields come from the live guild, the config fields from the
/// parameters, and the bot fields start at their defaults.
///
/// Expected: Ok with guild created
#[tokio::test]
async fn creates_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = &test.db;

    let before = Utc::now();
    let guild = GuildRepository::new(db)
        .create(CreateGuildParam {
            live: live_guild(),
            config: json!({ "nickname": "rowbot" }),
            config_url: "https://github.com/x/y".to_string(),
        })
        .await?;

    assert_eq!(guild.guild_id, 123456789);
    assert_eq!(guild.owner_id, Some(42));
    assert_eq!(guild.name.as_deref(), Some("Test Guild"));
    assert_eq!(guild.icon.as_deref(), Some("abc"));
    assert_eq!(guild.config(), Some(&json!({ "nickname": "rowbot" })));
    assert!(guild.enabled);
    assert!(guild.whitelist.is_empty());
    assert!(guild.last_ban_sync.is_none());
    assert!(guild.added_at >= before - chrono::Duration::seconds(1));
    assert!(guild.cached_config().is_none());

    let db_guild = entity::prelude::Guild::find_by_id(123456789i64)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(db_guild.config_url, "https://github.com/x/y");
    assert_eq!(db_guild.whitelist, json!([]));

    Ok(())
}

/// Tests inserting a guild that already has a record.
///
/// Expected: Err with unique constraint violation
#[tokio::test]
async fn fails_for_existing_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = &test.db;

    factory::guild::GuildFactory::new(db)
        .guild_id(123456789)
        .build()
        .await?;

    let result = GuildRepository::new(db)
        .create(CreateGuildParam {
            live: live_guild(),
            config: json!({}),
            config_url: "https://github.com/x/y".to_string(),
        })
        .await;

    let err = result.unwrap_err();
    assert!(matches!(
        err.sql_err(),
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}
