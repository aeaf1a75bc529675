use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MatchSeries::Table)
                    .if_not_exists()
                    .col(pk_auto(MatchSeries::Id))
                    .col(string(MatchSeries::Name))
                    .col(text(MatchSeries::Description).default(""))
                    .col(boolean(MatchSeries::IsActive).default(true))
                    .col(
                        timestamp(MatchSeries::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MatchSeries::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MatchSeries {
    Table,
    Id,
    Name,
    Description,
    IsActive,
    CreatedAt,
}
