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
                    .table(GameMatch::Table)
                    .if_not_exists()
                    .col(pk_auto(GameMatch::Id))
                    .col(integer(GameMatch::Team1Id))
                    .col(integer(GameMatch::Team2Id))
                    .col(integer(GameMatch::Goals1).default(0))
                    .col(integer(GameMatch::Goals2).default(0))
                    .col(boolean(GameMatch::IsFinished).default(false))
                    .col(
                        timestamp(GameMatch::PlayedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_game_match_team1_id")
                            .from(GameMatch::Table, GameMatch::Team1Id)
                            .to(Team::Table, Team::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_game_match_team2_id")
                            .from(GameMatch::Table, GameMatch::Team2Id)
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
            .drop_table(Table::drop().table(GameMatch::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GameMatch {
    Table,
    Id,
    Team1Id,
    Team2Id,
    Goals1,
    Goals2,
    IsFinished,
    PlayedAt,
}
