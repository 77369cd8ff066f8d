//! Guild emoji cache repository.

use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::model::live::LiveEmoji;

pub struct GuildEmojiRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuildEmojiRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates or fully overwrites the cached row for a live emoji.
    ///
    /// Looks the emoji up by id, then overwrites `guild_id`, `name`, `require_colons`,
    /// `managed` and `roles` from the live emoji. A new row is inserted, an existing row
    /// is updated in place. The `deleted` flag of an existing row is left as is.
    ///
    /// # Arguments
    /// - `emoji` - Live emoji to mirror
    /// - `guild_id` - Guild to file the emoji under; falls back to `emoji.guild_id`
    ///
    /// # Returns
    /// - `Ok(Model)` - The persisted row
    /// - `Err(DbErr)` - Database error during lookup, insert or update
    pub async fn upsert_from_live(
        &self,
        emoji: &LiveEmoji,
        guild_id: Option<u64>,
    ) -> Result<entity::guild_emoji::Model, DbErr> {
        let existing = entity::prelude::GuildEmoji::find_by_id(emoji.id as i64)
            .one(self.db)
            .await?;
        let is_new = existing.is_none();

        let mut model = match existing {
            Some(existing) => existing.into_active_model(),
            None => entity::guild_emoji::ActiveModel {
                emoji_id: ActiveValue::Set(emoji.id as i64),
                deleted: ActiveValue::Set(false),
                ..Default::default()
            },
        };

        model.guild_id = ActiveValue::Set(guild_id.unwrap_or(emoji.guild_id) as i64);
        model.name = ActiveValue::Set(emoji.name.clone());
        model.require_colons = ActiveValue::Set(emoji.require_colons);
        model.managed = ActiveValue::Set(emoji.managed);
        model.roles = ActiveValue::Set(serde_json::json!(emoji.roles));

        if is_new {
            model.insert(self.db).await
        } else {
            model.update(self.db).await
        }
    }

    /// Flags every cached emoji of a guild as deleted unless its id is in `keep`.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows newly flagged
    /// - `Err(DbErr)` - Database error during update
    pub async fn mark_deleted_except(&self, guild_id: u64, keep: &[u64]) -> Result<u64, DbErr> {
        let result = entity::prelude::GuildEmoji::update_many()
            .col_expr(entity::guild_emoji::Column::Deleted, Expr::value(true))
            .filter(entity::guild_emoji::Column::GuildId.eq(guild_id as i64))
            .filter(entity::guild_emoji::Column::Deleted.eq(false))
            .filter(
                entity::guild_emoji::Column::EmojiId.is_not_in(keep.iter().map(|id| *id as i64)),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Gets every cached emoji of a guild, deleted ones included, ordered by name.
    pub async fn get_by_guild_id(
        &self,
        guild_id: u64,
    ) -> Result<Vec<entity::guild_emoji::Model>, DbErr> {
        entity::prelude::GuildEmoji::find()
            .filter(entity::guild_emoji::Column::GuildId.eq(guild_id as i64))
            .order_by_asc(entity::guild_emoji::Column::Name)
            .all(self.db)
            .await
    }
}
