//! Guild ban factory for creating test ban rows.
//!
//! The factory only inserts the ban row. Tests that need the banned user to exist
//! should create it with the user factory first.

use crate::factory::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test guild bans with customizable fields.
pub struct GuildBanFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: i64,
    user_id: u64,
    reason: Option<String>,
}

impl<'a> GuildBanFactory<'a> {
    /// Creates a new GuildBanFactory for the given guild.
    ///
    /// Defaults:
    /// - user_id: auto-incremented
    /// - reason: `None`
    pub fn new(db: &'a DatabaseConnection, guild_id: i64) -> Self {
        Self {
            db,
            guild_id,
            user_id: next_id(),
            reason: None,
        }
    }

    pub fn user_id(mut self, user_id: u64) -> Self {
        self.user_id = user_id;
        self
    }

    pub fn reason(mut self, reason: Option<&str>) -> Self {
        self.reason = reason.map(str::to_string);
        self
    }

    /// Builds and inserts the ban row into the database.
    pub async fn build(self) -> Result<entity::guild_ban::Model, DbErr> {
        entity::guild_ban::ActiveModel {
            user_id: ActiveValue::Set(self.user_id as i64),
            guild_id: ActiveValue::Set(self.guild_id),
            reason: ActiveValue::Set(self.reason),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a ban with default values for the given guild.
pub async fn create_ban(
    db: &DatabaseConnection,
    guild_id: i64,
) -> Result<entity::guild_ban::Model, DbErr> {
    GuildBanFactory::new(db, guild_id).build().await
}
