use sea_orm_migration::{prelude::*, schema::*};

use super::m20261001_000004_create_team_table::Team;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Classification::Table)
                    .if_not_exists()
                    .col(pk_auto(Classification::Id))
                    .col(integer_uniq(Classification::TeamId))
                    .col(integer(Classification::Points).default(0))
                    .col(integer(Classification::GamesPlayed).default(0))
                    .col(integer(Classification::GamesWon).default(0))
                    .col(integer(Classification::GamesLost).default(0))
                    .col(integer(Classification::GoalsFor).default(0))
                    .col(integer(Classification::GoalsAgainst).default(0))
                    .col(integer_null(Classification::Position))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_classification_team_id")
                            .from(Classification::Table, Classification::TeamId)
                            .to(Team::Table, Team::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Classification::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Classification {
    Table,
    Id,
    TeamId,
    Points,
    GamesPlayed,
    GamesWon,
    GamesLost,
    GoalsFor,
    GoalsAgainst,
    Position,
}
