use super::*;

/// Tests listing a guild's emojis.
///
/// Expected: Ok with the guild's emojis ordered by name, deleted ones included
#[tokio::test]
async fn lists_guild_emojis_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = &test.db;

    factory::guild_emoji::GuildEmojiFactory::new(db, 1)
        .name("zebra")
        .build()
        .await?;
    factory::guild_emoji::GuildEmojiFactory::new(db, 1)
        .name("alpaca")
        .deleted(true)
        .build()
        .await?;
    factory::create_emoji(db, 2).await?;

    let emojis = GuildEmojiRepository::new(db).get_by_guild_id(1).await?;

    let names: Vec<&str> = emojis.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["alpaca", "zebra"]);

    Ok(())
}
