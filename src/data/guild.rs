//! Guild data repository for database operations.
//!
//! Every write issued here touches a single `guilds` row and only the columns it is
//! asked to change.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};
use serde_json::Value;

use crate::model::guild::{CreateGuildParam, Guild, MirrorField, WhitelistFlag};

pub struct GuildRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuildRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a guild by its Discord guild ID.
    ///
    /// # Returns
    /// - `Ok(Some(Guild))`: Guild has been set up
    /// - `Ok(None)`: No record for this guild
    /// - `Err(DbErr)`: Database error during query or stored whitelist is malformed
    pub async fn find_by_guild_id(&self, guild_id: u64) -> Result<Option<Guild>, DbErr> {
        entity::prelude::Guild::find_by_id(guild_id as i64)
            .one(self.db)
            .await?
            .map(Guild::from_entity)
            .transpose()
    }

    /// Inserts a new guild record.
    ///
    /// The guild starts enabled with an empty whitelist, no ban sync and `added_at` set
    /// to now. Fails with a unique constraint violation if the guild already exists.
    pub async fn create(&self, param: CreateGuildParam) -> Result<Guild, DbErr> {
        let live = param.live;

        let entity = entity::guild::ActiveModel {
            guild_id: ActiveValue::Set(live.id as i64),
            owner_id: ActiveValue::Set(live.owner_id.map(|id| id as i64)),
            name: ActiveValue::Set(live.name),
            icon: ActiveValue::Set(live.icon),
            splash: ActiveValue::Set(live.splash),
            region: ActiveValue::Set(live.region),
            last_ban_sync: ActiveValue::Set(None),
            config: ActiveValue::Set(Some(param.config)),
            config_url: ActiveValue::Set(param.config_url),
            enabled: ActiveValue::Set(true),
            whitelist: ActiveValue::Set(Value::Array(Vec::new())),
            added_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Guild::from_entity(entity)
    }

    /// Writes the given mirror columns in a single UPDATE.
    ///
    /// Columns not named in `changes` are left out of the statement. Does nothing when
    /// `changes` is empty.
    pub async fn update_mirror_fields(
        &self,
        guild_id: u64,
        changes: &[MirrorField],
    ) -> Result<(), DbErr> {
        if changes.is_empty() {
            return Ok(());
        }

        let mut model = <entity::guild::ActiveModel as Default>::default();

        for change in changes {
            match change {
                MirrorField::OwnerId(value) => {
                    model.owner_id = ActiveValue::Set(value.map(|id| id as i64))
                }
                MirrorField::Name(value) => model.name = ActiveValue::Set(value.clone()),
                MirrorField::Icon(value) => model.icon = ActiveValue::Set(value.clone()),
                MirrorField::Splash(value) => model.splash = ActiveValue::Set(value.clone()),
                MirrorField::Region(value) => model.region = ActiveValue::Set(value.clone()),
            }
        }

        self.update_columns(guild_id, model).await
    }

    /// Overwrites the stored raw config document.
    pub async fn update_config(&self, guild_id: u64, config: Value) -> Result<(), DbErr> {
        self.update_columns(
            guild_id,
            entity::guild::ActiveModel {
                config: ActiveValue::Set(Some(config)),
                ..Default::default()
            },
        )
        .await
    }

    /// Stamps the time of the last completed ban list sync.
    pub async fn update_last_ban_sync(
        &self,
        guild_id: u64,
        synced_at: DateTime<Utc>,
    ) -> Result<(), DbErr> {
        self.update_columns(
            guild_id,
            entity::guild::ActiveModel {
                last_ban_sync: ActiveValue::Set(Some(synced_at)),
                ..Default::default()
            },
        )
        .await
    }

    pub async fn set_enabled(&self, guild_id: u64, enabled: bool) -> Result<(), DbErr> {
        self.update_columns(
            guild_id,
            entity::guild::ActiveModel {
                enabled: ActiveValue::Set(enabled),
                ..Default::default()
            },
        )
        .await
    }

    pub async fn update_whitelist(
        &self,
        guild_id: u64,
        whitelist: &[WhitelistFlag],
    ) -> Result<(), DbErr> {
        let whitelist = serde_json::to_value(whitelist)
            .map_err(|e| DbErr::Custom(format!("Failed to serialize guild whitelist: {}", e)))?;

        self.update_columns(
            guild_id,
            entity::guild::ActiveModel {
                whitelist: ActiveValue::Set(whitelist),
                ..Default::default()
            },
        )
        .await
    }

    /// Updates only the `Set` columns of `model` on the row for `guild_id`.
    ///
    /// Updating a guild with no record is a no-op, not an error.
    async fn update_columns(
        &self,
        guild_id: u64,
        model: entity::guild::ActiveModel,
    ) -> Result<(), DbErr> {
        entity::prelude::Guild::update_many()
            .set(model)
            .filter(entity::guild::Column::GuildId.eq(guild_id as i64))
            .exec(self.db)
            .await?;

        Ok(())
    }
}
