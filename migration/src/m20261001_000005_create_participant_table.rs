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
                    .table(Participant::Table)
                    .if_not_exists()
                    .col(pk_auto(Participant::Id))
                    .col(integer(Participant::TeamId))
                    .col(string(Participant::Name))
                    .col(string_null(Participant::PhoneNumber))
                    .col(boolean(Participant::IsActive).default(true))
                    .col(
                        timestamp(Participant::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_participant_team_id")
                            .from(Participant::Table, Participant::TeamId)
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
            .drop_table(Table::drop().table(Participant::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Participant {
    Table,
    Id,
    TeamId,
    Name,
    PhoneNumber,
    IsActive,
    CreatedAt,
}
