use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "guilds")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub guild_id: i64,
    pub owner_id: Option<i64>,
    pub name: Option<String>,
    pub icon: Option<String>,
    pub splash: Option<String>,
    pub region: Option<String>,
    pub last_ban_sync: Option<DateTimeUtc>,
    pub config: Option<Json>,
    pub config_url: String,
    #[sea_orm(default_value = true)]
    pub enabled: bool,
    pub whitelist: Json,
    pub added_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
