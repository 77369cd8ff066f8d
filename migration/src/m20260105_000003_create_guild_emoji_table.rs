use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GuildEmoji::Table)
                    .if_not_exists()
                    .col(big_integer(GuildEmoji::EmojiId).primary_key())
                    .col(big_integer(GuildEmoji::GuildId))
                    .col(string(GuildEmoji::Name))
                    .col(boolean(GuildEmoji::RequireColons))
                    .col(boolean(GuildEmoji::Managed))
                    .col(json(GuildEmoji::Roles))
                    .col(boolean(GuildEmoji::Deleted).default(false))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_guild_emojis_name")
                    .table(GuildEmoji::Table)
                    .col(GuildEmoji::Name)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GuildEmoji::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GuildEmoji {
    #[sea_orm(iden = "guild_emojis")]
    Table,
    EmojiId,
    GuildId,
    Name,
    RequireColons,
    Managed,
    Roles,
    Deleted,
}
