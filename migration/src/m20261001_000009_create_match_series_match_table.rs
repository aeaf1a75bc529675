use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20261001_000007_create_game_match_table::GameMatch,
    m20261001_000008_create_match_series_table::MatchSeries,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MatchSeriesMatch::Table)
                    .if_not_exists()
                    .col(integer(MatchSeriesMatch::MatchSeriesId))
                    .col(integer(MatchSeriesMatch::GameMatchId))
                    .primary_key(
                        Index::create()
                            .col(MatchSeriesMatch::MatchSeriesId)
                            .col(MatchSeriesMatch::GameMatchId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_match_series_match_series_id")
                            .from(MatchSeriesMatch::Table, MatchSeriesMatch::MatchSeriesId)
                            .to(MatchSeries::Table, MatchSeries::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_match_series_match_game_match_id")
                            .from(MatchSeriesMatch::Table, MatchSeriesMatch::GameMatchId)
                            .to(GameMatch::Table, GameMatch::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MatchSeriesMatch::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MatchSeriesMatch {
    Table,
    MatchSeriesId,
    GameMatchId,
}
