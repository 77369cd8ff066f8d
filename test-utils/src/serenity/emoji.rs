//! Test factory for creating Serenity Emoji objects.

use serenity::all::Emoji;

/// Creates a test Serenity Emoji restricted to the given role ids.
///
/// The emoji is static, available, requires colons and is not managed.
///
/// # Panics
/// - If the JSON cannot be deserialized into an Emoji (indicates invalid test data)
pub fn create_test_emoji(emoji_id: u64, name: &str, roles: &[u64]) -> Emoji {
    let roles: Vec<String> = roles.iter().map(|id| id.to_string()).collect();

    serde_json::from_value(serde_json::json!({
        "id": emoji_id.to_string(),
        "name": name,
        "roles": roles,
        "require_colons": true,
        "managed": false,
        "animated": false,
        "available": true,
    }))
    .expect("Failed to create test emoji - invalid JSON structure")
}
