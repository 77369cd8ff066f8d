//! Guild factory for creating test guild rows.

use crate::factory::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test guilds with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::guild::GuildFactory;
///
/// let guild = GuildFactory::new(&db)
///     .guild_id(987654321)
///     .name(Some("CustomGuild"))
///     .config(Some(serde_json::json!({ "nickname": "bot" })))
///     .build()
///     .await?;
/// ```
pub struct GuildFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: u64,
    owner_id: Option<u64>,
    name: Option<String>,
    icon: Option<String>,
    splash: Option<String>,
    region: Option<String>,
    config: Option<serde_json::Value>,
    config_url: String,
    enabled: bool,
    whitelist: serde_json::Value,
    last_ban_sync: Option<DateTime<Utc>>,
}

impl<'a> GuildFactory<'a> {
    /// Creates a new GuildFactory with default values.
    ///
    /// Defaults:
    /// - guild_id: auto-incremented
    /// - owner_id: `Some(1)`
    /// - name: `"Guild {id}"`
    /// - icon, splash, region: `None`
    /// - config: `Some({})`
    /// - config_url: a raw GitHub URL unique to the guild
    /// - enabled: `true`, whitelist: `[]`, last_ban_sync: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            guild_id: id,
            owner_id: Some(1),
            name: Some(format!("Guild {}", id)),
            icon: None,
            splash: None,
            region: None,
            config: Some(serde_json::json!({})),
            config_url: format!("https://raw.githubusercontent.com/test/configs/main/{}.yml", id),
            enabled: true,
            whitelist: serde_json::json!([]),
            last_ban_sync: None,
        }
    }

    pub fn guild_id(mut self, guild_id: u64) -> Self {
        self.guild_id = guild_id;
        self
    }

    pub fn owner_id(mut self, owner_id: Option<u64>) -> Self {
        self.owner_id = owner_id;
        self
    }

    pub fn name(mut self, name: Option<&str>) -> Self {
        self.name = name.map(str::to_string);
        self
    }

    pub fn icon(mut self, icon: Option<&str>) -> Self {
        self.icon = icon.map(str::to_string);
        self
    }

    pub fn splash(mut self, splash: Option<&str>) -> Self {
        self.splash = splash.map(str::to_string);
        self
    }

    pub fn region(mut self, region: Option<&str>) -> Self {
        self.region = region.map(str::to_string);
        self
    }

    /// Sets the stored raw config document. `None` leaves the column null.
    pub fn config(mut self, config: Option<serde_json::Value>) -> Self {
        self.config = config;
        self
    }

    pub fn config_url(mut self, config_url: impl Into<String>) -> Self {
        self.config_url = config_url.into();
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Sets the raw whitelist column, e.g. `json!(["music"])`.
    pub fn whitelist(mut self, whitelist: serde_json::Value) -> Self {
        self.whitelist = whitelist;
        self
    }

    pub fn last_ban_sync(mut self, last_ban_sync: Option<DateTime<Utc>>) -> Self {
        self.last_ban_sync = last_ban_sync;
        self
    }

    /// Builds and inserts the guild row into the database.
    ///
    /// # Returns
    /// - `Ok(entity::guild::Model)` - Created guild row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::guild::Model, DbErr> {
        entity::guild::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id as i64),
            owner_id: ActiveValue::Set(self.owner_id.map(|id| id as i64)),
            name: ActiveValue::Set(self.name),
            icon: ActiveValue::Set(self.icon),
            splash: ActiveValue::Set(self.splash),
            region: ActiveValue::Set(self.region),
            last_ban_sync: ActiveValue::Set(self.last_ban_sync),
            config: ActiveValue::Set(self.config),
            config_url: ActiveValue::Set(self.config_url),
            enabled: ActiveValue::Set(self.enabled),
            whitelist: ActiveValue::Set(self.whitelist),
            added_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a guild with default values.
///
/// Shorthand for `GuildFactory::new(db).build().await`.
pub async fn create_guild(db: &DatabaseConnection) -> Result<entity::guild::Model, DbErr> {
    GuildFactory::new(db).build().await
}
