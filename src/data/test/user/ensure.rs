use super::*;

fn live_user(user_id: u64, username: &str) -> LiveUser {
    LiveUser {
        id: user_id,
        username: username.to_string(),
        avatar: Some("avatar_hash".to_string()),
        bot: true,
    }
}

/// Tests ensuring a user with no row.
///
/// Expected: Ok with user created from the live attributes
#[tokio::test]
async fn creates_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = &test.db;

    let user = UserRepository::new(db)
        .ensure(&live_user(42, "rowbot"))
        .await?;

    assert_eq!(user.user_id, 42);
    assert_eq!(user.username, "rowbot");
    assert_eq!(user.avatar.as_deref(), Some("avatar_hash"));
    assert!(user.bot);

    Ok(())
}

/// Tests ensuring a user who already has a row.
///
/// Expected: Ok with existing row returned unchanged
#[tokio::test]
async fn returns_existing_user_unchanged() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = &test.db;

    let existing = factory::user::UserFactory::new(db)
        .username("original")
        .build()
        .await?;

    let user = UserRepository::new(db)
        .ensure(&live_user(existing.user_id as u64, "renamed"))
        .await?;

    assert_eq!(user.username, "original");
    assert!(!user.bot);
    assert_eq!(
        UserRepository::new(db)
            .find_by_user_id(existing.user_id as u64)
            .await?
            .unwrap()
            .username,
        "original"
    );

    Ok(())
}
