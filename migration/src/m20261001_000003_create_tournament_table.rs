use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Tournament::Table)
                    .if_not_exists()
                    .col(pk_auto(Tournament::Id))
                    .col(string_uniq(Tournament::Name))
                    .col(date(Tournament::StartDate))
                    .col(date(Tournament::EstimatedEndDate))
                    .col(
                        timestamp(Tournament::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Tournament::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Tournament {
    Table,
    Id,
    Name,
    StartDate,
    EstimatedEndDate,
    CreatedAt,
}
