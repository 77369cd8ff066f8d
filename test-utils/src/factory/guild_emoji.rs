//! Guild emoji factory for creating test emoji rows.

use crate::factory::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test guild emojis with customizable fields.
pub struct GuildEmojiFactory<'a> {
    db: &'a DatabaseConnection,
    emoji_id: u64,
    guild_id: i64,
    name: String,
    require_colons: bool,
    managed: bool,
    roles: Vec<u64>,
    deleted: bool,
}

impl<'a> GuildEmojiFactory<'a> {
    /// Creates a new GuildEmojiFactory for the given guild.
    ///
    /// Defaults:
    /// - emoji_id: auto-incremented
    /// - name: `"emoji_{id}"`
    /// - require_colons: `true`, managed: `false`, roles: `[]`, deleted: `false`
    pub fn new(db: &'a DatabaseConnection, guild_id: i64) -> Self {
        let id = next_id();
        Self {
            db,
            emoji_id: id,
            guild_id,
            name: format!("emoji_{}", id),
            require_colons: true,
            managed: false,
            roles: Vec::new(),
            deleted: false,
        }
    }

    pub fn emoji_id(mut self, emoji_id: u64) -> Self {
        self.emoji_id = emoji_id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn managed(mut self, managed: bool) -> Self {
        self.managed = managed;
        self
    }

    pub fn roles(mut self, roles: Vec<u64>) -> Self {
        self.roles = roles;
        self
    }

    pub fn deleted(mut self, deleted: bool) -> Self {
        self.deleted = deleted;
        self
    }

    /// Builds and inserts the emoji row into the database.
    pub async fn build(self) -> Result<entity::guild_emoji::Model, DbErr> {
        entity::guild_emoji::ActiveModel {
            emoji_id: ActiveValue::Set(self.emoji_id as i64),
            guild_id: ActiveValue::Set(self.guild_id),
            name: ActiveValue::Set(self.name),
            require_colons: ActiveValue::Set(self.require_colons),
            managed: ActiveValue::Set(self.managed),
            roles: ActiveValue::Set(serde_json::json!(self.roles)),
            deleted: ActiveValue::Set(self.deleted),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an emoji with default values for the given guild.
pub async fn create_emoji(
    db: &DatabaseConnection,
    guild_id: i64,
) -> Result<entity::guild_emoji::Model, DbErr> {
    GuildEmojiFactory::new(db, guild_id).build().await
}
