//! User factory for creating test user rows.

use crate::factory::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users with customizable fields.
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: u64,
    username: String,
    avatar: Option<String>,
    bot: bool,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - user_id: auto-incremented
    /// - username: `"user_{id}"`
    /// - avatar: `None`, bot: `false`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            user_id: id,
            username: format!("user_{}", id),
            avatar: None,
            bot: false,
        }
    }

    pub fn user_id(mut self, user_id: u64) -> Self {
        self.user_id = user_id;
        self
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn bot(mut self, bot: bool) -> Self {
        self.bot = bot;
        self
    }

    /// Builds and inserts the user row into the database.
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            user_id: ActiveValue::Set(self.user_id as i64),
            username: ActiveValue::Set(self.username),
            avatar: ActiveValue::Set(self.avatar),
            bot: ActiveValue::Set(self.bot),
            added_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}
