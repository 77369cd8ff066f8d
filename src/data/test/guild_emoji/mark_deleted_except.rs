use super::*;

/// Tests flagging emojis that are missing from the live set.
///
/// Verifies that kept emojis and emojis of other guilds are untouched and that the
/// count only covers newly flagged rows.
///
/// Expected: Ok(1) with missing emoji flagged
#[tokio::test]
async fn flags_missing_emojis() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = &test.db;

    let kept = factory::guild_emoji::GuildEmojiFactory::new(db, 1)
        .build()
        .await?;
    let removed = factory::guild_emoji::GuildEmojiFactory::new(db, 1)
        .build()
        .await?;
    factory::guild_emoji::GuildEmojiFactory::new(db, 1)
        .deleted(true)
        .build()
        .await?;
    let other_guild = factory::create_emoji(db, 2).await?;

    let flagged = GuildEmojiRepository::new(db)
        .mark_deleted_except(1, &[kept.emoji_id as u64])
        .await?;

    assert_eq!(flagged, 1);

    let find = |id: i64| entity::prelude::GuildEmoji::find_by_id(id).one(db);
    assert!(!find(kept.emoji_id).await?.unwrap().deleted);
    assert!(find(removed.emoji_id).await?.unwrap().deleted);
    assert!(!find(other_guild.emoji_id).await?.unwrap().deleted);

    Ok(())
}

/// Tests flagging with an empty live set.
///
/// Expected: Ok with every emoji of the guild flagged
#[tokio::test]
async fn flags_all_when_nothing_kept() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = &test.db;

    factory::create_emoji(db, 1).await?;
    factory::create_emoji(db, 1).await?;

    let flagged = GuildEmojiRepository::new(db)
        .mark_deleted_except(1, &[])
        .await?;

    assert_eq!(flagged, 2);

    Ok(())
}
