use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Scores::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Scores::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Scores::UserId).uuid().not_null())
                    .col(ColumnDef::new(Scores::Date).date().not_null())
                    .col(ColumnDef::new(Scores::Won).boolean().not_null())
                    .col(ColumnDef::new(Scores::Lost).boolean().not_null())
                    .to_owned(),
            )
            .await?;

        // Per-user score listings and ranking aggregation.
        manager
            .create_index(
                Index::create()
                    .name("idx_scores_user_id")
                    .table(Scores::Table)
                    .col(Scores::UserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Scores::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Scores {
    Table,
    Id,
    UserId,
    Date,
    Won,
    Lost,
}
