use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OptOut::Table)
                    .if_not_exists()
                    .col(string(OptOut::UserId).primary_key())
                    .col(string_uniq(OptOut::UserTag))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OptOut::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum OptOut {
    Table,
    UserId,
    UserTag,
}
