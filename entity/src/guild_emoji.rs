use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "guild_emojis")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub emoji_id: i64,
    pub guild_id: i64,
    #[sea_orm(indexed)]
    pub name: String,
    pub require_colons: bool,
    pub managed: bool,
    pub roles: Json,
    #[sea_orm(default_value = false)]
    pub deleted: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
