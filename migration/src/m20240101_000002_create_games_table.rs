use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Games::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Games::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Games::Player1).uuid().not_null())
                    .col(ColumnDef::new(Games::Player2).uuid().not_null())
                    .col(
                        ColumnDef::new(Games::Board)
                            .string()
                            .not_null()
                            .default("-,-,-,-,-,-,-,-,-"),
                    )
                    .col(
                        ColumnDef::new(Games::Moves)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Games::GameOver)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Games::Winner).string())
                    .to_owned(),
            )
            .await?;

        // Both seats are queried when listing a user's games.
        manager
            .create_index(
                Index::create()
                    .name("idx_games_player1")
                    .table(Games::Table)
                    .col(Games::Player1)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_games_player2")
                    .table(Games::Table)
                    .col(Games::Player2)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Games::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Games {
    Table,
    Id,
    Player1,
    Player2,
    Board,
    Moves,
    GameOver,
    Winner,
}
