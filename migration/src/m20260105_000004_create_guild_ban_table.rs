use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // No foreign keys: bans are matched to guilds and users by id only
        manager
            .create_table(
                Table::create()
                    .table(GuildBan::Table)
                    .if_not_exists()
                    .col(big_integer(GuildBan::UserId))
                    .col(big_integer(GuildBan::GuildId))
                    .col(text_null(GuildBan::Reason))
                    .primary_key(
                        Index::create()
                            .col(GuildBan::UserId)
                            .col(GuildBan::GuildId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GuildBan::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GuildBan {
    #[sea_orm(iden = "guild_bans")]
    Table,
    UserId,
    GuildId,
    Reason,
}
