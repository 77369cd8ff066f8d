//! Test factories for creating Serenity Ban and User objects.

use serenity::all::{Ban, User};

/// Creates a test Serenity User.
///
/// # Panics
/// - If the JSON cannot be deserialized into a User (indicates invalid test data)
pub fn create_test_user(user_id: u64, username: &str) -> User {
    serde_json::from_value(serde_json::json!({
        "id": user_id.to_string(),
        "username": username,
        "discriminator": "0",
        "global_name": null,
        "avatar": null,
        "bot": false,
    }))
    .expect("Failed to create test user - invalid JSON structure")
}

/// Creates a test Serenity Ban for a freshly built user.
///
/// # Panics
/// - If the JSON cannot be deserialized into a Ban (indicates invalid test data)
pub fn create_test_ban(user_id: u64, username: &str, reason: Option<&str>) -> Ban {
    serde_json::from_value(serde_json::json!({
        "reason": reason,
        "user": {
            "id": user_id.to_string(),
            "username": username,
            "discriminator": "0",
            "global_name": null,
            "avatar": null,
            "bot": false,
        },
    }))
    .expect("Failed to create test ban - invalid JSON structure")
}
