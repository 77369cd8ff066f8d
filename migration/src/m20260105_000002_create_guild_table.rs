use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Guild::Table)
                    .if_not_exists()
                    .col(big_integer(Guild::GuildId).primary_key())
                    .col(big_integer_null(Guild::OwnerId))
                    .col(text_null(Guild::Name))
                    .col(text_null(Guild::Icon))
                    .col(text_null(Guild::Splash))
                    .col(text_null(Guild::Region))
                    .col(timestamp_with_time_zone_null(Guild::LastBanSync))
                    .col(json_null(Guild::Config))
                    .col(string(Guild::ConfigUrl))
                    .col(boolean(Guild::Enabled).default(true))
                    .col(json(Guild::Whitelist).default("[]"))
                    .col(timestamp_with_time_zone(Guild::AddedAt).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Guild::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Guild {
    #[sea_orm(iden = "guilds")]
    Table,
    GuildId,
    OwnerId,
    Name,
    Icon,
    Splash,
    Region,
    LastBanSync,
    Config,
    ConfigUrl,
    Enabled,
    Whitelist,
    AddedAt,
}
