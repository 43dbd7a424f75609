use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ReplyChannel::Table)
                    .if_not_exists()
                    .col(string(ReplyChannel::ChannelId).primary_key())
                    .col(string(ReplyChannel::GuildId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_reply_channel_guild_id")
                    .table(ReplyChannel::Table)
                    .col(ReplyChannel::GuildId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_reply_channel_guild_id")
                    .table(ReplyChannel::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ReplyChannel::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ReplyChannel {
    Table,
    ChannelId,
    GuildId,
}
