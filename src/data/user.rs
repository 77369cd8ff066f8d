//! User data repository.
//!
//! The `users` table is shared with the rest of the bot. The guild layer only needs to
//! make sure a user row exists before it records a ban against that user.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait};

use crate::model::live::LiveUser;

pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns the user's row, creating a minimal one if none exists.
    ///
    /// An existing row is never modified.
    ///
    /// # Returns
    /// - `Ok(Model)` - Existing or newly created user
    /// - `Err(DbErr)` - Database error during lookup or insert
    pub async fn ensure(&self, user: &LiveUser) -> Result<entity::user::Model, DbErr> {
        if let Some(existing) = self.find_by_user_id(user.id).await? {
            return Ok(existing);
        }

        entity::user::ActiveModel {
            user_id: ActiveValue::Set(user.id as i64),
            username: ActiveValue::Set(user.username.clone()),
            avatar: ActiveValue::Set(user.avatar.clone()),
            bot: ActiveValue::Set(user.bot),
            added_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_user_id(&self, user_id: u64) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(user_id as i64)
            .one(self.db)
            .await
    }
}
