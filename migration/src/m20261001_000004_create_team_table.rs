use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20261001_000001_create_account_table::Account,
    m20261001_000003_create_tournament_table::Tournament,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Team::Table)
                    .if_not_exists()
                    .col(pk_auto(Team::Id))
                    .col(integer_null(Team::AccountId).unique_key())
                    .col(integer(Team::TournamentId))
                    .col(string(Team::Name))
                    .col(string_null(Team::Group))
                    .col(
                        timestamp(Team::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_team_account_id")
                            .from(Team::Table, Team::AccountId)
                            .to(Account::Table, Account::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_team_tournament_id")
                            .from(Team::Table, Team::TournamentId)
                            .to(Tournament::Table, Tournament::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Team names only need to be unique within a tournament
        manager
            .create_index(
                Index::create()
                    .name("idx_team_name_tournament_id")
                    .table(Team::Table)
                    .col(Team::Name)
                    .col(Team::TournamentId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Team::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Team {
    Table,
    Id,
    AccountId,
    TournamentId,
    Name,
    Group,
    CreatedAt,
}
