//! Guild ban cache repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::{data::user::UserRepository, model::live::LiveBan};

pub struct GuildBanRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuildBanRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Ensures a ban row exists for the banned user in the guild.
    ///
    /// Creates the banned user first if they have no `users` row. The ban row is only
    /// ever inserted: if one already exists it is returned unchanged, even when the live
    /// ban carries a different reason.
    ///
    /// # Returns
    /// - `Ok(Model)` - The existing or newly created ban row
    /// - `Err(DbErr)` - Database error while ensuring the user or the ban
    pub async fn ensure(
        &self,
        guild_id: u64,
        ban: &LiveBan,
    ) -> Result<entity::guild_ban::Model, DbErr> {
        UserRepository::new(self.db).ensure(&ban.user).await?;

        if let Some(existing) = self.find(guild_id, ban.user.id).await? {
            return Ok(existing);
        }

        entity::guild_ban::ActiveModel {
            user_id: ActiveValue::Set(ban.user.id as i64),
            guild_id: ActiveValue::Set(guild_id as i64),
            reason: ActiveValue::Set(ban.reason.clone()),
        }
        .insert(self.db)
        .await
    }

    pub async fn find(
        &self,
        guild_id: u64,
        user_id: u64,
    ) -> Result<Option<entity::guild_ban::Model>, DbErr> {
        entity::prelude::GuildBan::find_by_id((user_id as i64, guild_id as i64))
            .one(self.db)
            .await
    }

    pub async fn get_by_guild_id(
        &self,
        guild_id: u64,
    ) -> Result<Vec<entity::guild_ban::Model>, DbErr> {
        entity::prelude::GuildBan::find()
            .filter(entity::guild_ban::Column::GuildId.eq(guild_id as i64))
            .order_by_asc(entity::guild_ban::Column::UserId)
            .all(self.db)
            .await
    }
}
