use super::*;

/// Tests writing a subset of the mirror columns.
///
/// Verifies that named columns are written, including a clear to null, and the
/// others keep their values.
///
/// Expected: Ok with only named columns changed
#[tokio::test]
async fn writes_only_named_columns() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = &test.db;

    factory::guild::GuildFactory::new(db)
        .guild_id(123456789)
        .name(Some("Old Name"))
        .icon(Some("old_icon"))
        .splash(Some("old_splash"))
        .build()
        .await?;

    GuildRepository::new(db)
        .update_mirror_fields(
            123456789,
            &[
                MirrorField::Name(Some("New Name".to_string())),
                MirrorField::Icon(None),
            ],
        )
        .await?;

    let db_guild = entity::prelude::Guild::find_by_id(123456789i64)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(db_guild.name.as_deref(), Some("New Name"));
    assert!(db_guild.icon.is_none());
    assert_eq!(db_guild.splash.as_deref(), Some("old_splash"));
    assert_eq!(db_guild.owner_id, Some(1));

    Ok(())
}

/// Tests that an empty change list is accepted without touching the row.
///
/// Expected: Ok with row unchanged
#[tokio::test]
async fn accepts_empty_change_list() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = &test.db;

    let created = factory::create_guild(db).await?;

    GuildRepository::new(db)
        .update_mirror_fields(created.guild_id as u64, &[])
        .await?;

    let db_guild = entity::prelude::Guild::find_by_id(created.guild_id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(db_guild.owner_id, created.owner_id);
    assert_eq!(db_guild.name, created.name);
    assert_eq!(db_guild.icon, created.icon);

    Ok(())
}

/// Tests that other guilds are not touched.
///
/// Expected: Ok with second guild unchanged
#[tokio::test]
async fn leaves_other_guilds_untouched() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = &test.db;

    let target = factory::create_guild(db).await?;
    let other = factory::create_guild(db).await?;

    GuildRepository::new(db)
        .update_mirror_fields(
            target.guild_id as u64,
            &[MirrorField::Region(Some("europe".to_string()))],
        )
        .await?;

    let db_other = entity::prelude::Guild::find_by_id(other.guild_id)
        .one(db)
        .await?
        .unwrap();
    assert!(db_other.region.is_none());

    Ok(())
}
