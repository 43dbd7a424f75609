use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ReplyCooldown::Table)
                    .if_not_exists()
                    .col(string(ReplyCooldown::GuildId))
                    .col(string(ReplyCooldown::ChannelId))
                    .col(big_integer(ReplyCooldown::ExpiresAt))
                    .primary_key(
                        Index::create()
                            .col(ReplyCooldown::GuildId)
                            .col(ReplyCooldown::ChannelId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ReplyCooldown::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ReplyCooldown {
    Table,
    GuildId,
    ChannelId,
    ExpiresAt,
}
