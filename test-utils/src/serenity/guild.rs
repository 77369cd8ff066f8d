//! Test factory for creating Serenity Guild objects.

use serenity::all::Guild;

/// Owner id assigned to every guild built by [`create_test_guild`].
pub const TEST_OWNER_ID: u64 = 100000000000000000;

/// Pads a hash to Discord's image hash format.
///
/// Normal hashes are 32 hex characters; animated hashes carry an `a_` prefix and are
/// 34 characters total.
pub fn pad_image_hash(hash: &str) -> String {
    if hash.starts_with("a_") {
        if hash.len() < 34 {
            format!("{:0<34}", hash)
        } else {
            hash.to_string()
        }
    } else if hash.len() < 32 {
        format!("{:0<32}", hash)
    } else {
        hash.to_string()
    }
}

/// Creates a test Serenity Guild with customizable fields.
///
/// The icon hash is padded with [`pad_image_hash`]. The guild has no splash and is
/// owned by [`TEST_OWNER_ID`]; use [`create_test_guild_with_splash`] to set a splash.
///
/// # Panics
/// - If the JSON cannot be deserialized into a Guild (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// let guild = create_test_guild(123456789, "Test Guild", Some("abc123"));
/// assert_eq!(guild.icon.unwrap().to_string(), "abc12300000000000000000000000000");
/// ```
pub fn create_test_guild(guild_id: u64, name: &str, icon_hash: Option<&str>) -> Guild {
    create_test_guild_with_splash(guild_id, name, icon_hash, None)
}

/// Creates a test Serenity Guild with an optional splash hash.
pub fn create_test_guild_with_splash(
    guild_id: u64,
    name: &str,
    icon_hash: Option<&str>,
    splash_hash: Option<&str>,
) -> Guild {
    let formatted_icon = icon_hash.map(pad_image_hash);
    let formatted_splash = splash_hash.map(pad_image_hash);

    serde_json::from_value(serde_json::json!({
        "id": guild_id.to_string(),
        "name": name,
        "icon": formatted_icon,
        "icon_hash": formatted_icon,
        "splash": formatted_splash,
        "owner_id": TEST_OWNER_ID.to_string(),
        "afk_timeout": 300,
        "verification_level": 0,
        "default_message_notifications": 0,
        "explicit_content_filter": 0,
        "roles": [],
        "emojis": [],
        "stickers": [],
        "features": [],
        "mfa_level": 0,
        "system_channel_flags": 0,
        "premium_tier": 0,
        "premium_subscription_count": 0,
        "premium_progress_bar_enabled": false,
        "preferred_locale": "en-US",
        "nsfw_level": 0,
        "joined_at": "2020-01-01T00:00:00.000000+00:00",
        "large": false,
        "member_count": 100,
        "voice_states": [],
        "channels": [],
        "threads": [],
        "presences": [],
        "max_presences": 25000,
        "max_members": 100000,
        "unavailable": false,
        "members": [],
        "stage_instances": [],
        "guild_scheduled_events": [],
    }))
    .expect("Failed to create test guild - invalid JSON structure")
}
