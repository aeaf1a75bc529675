pub use sea_orm_migration::prelude::*;

mod m20261001_000001_create_account_table;
mod m20261001_000002_create_auth_token_table;
mod m20261001_000003_create_tournament_table;
mod m20261001_000004_create_team_table;
mod m20261001_000005_create_participant_table;
mod m20261001_000006_create_classification_table;
mod m20261001_000007_create_game_match_table;
mod m20261001_000008_create_match_series_table;
mod m20261001_000009_create_match_series_match_table;
mod m20261001_000010_create_gallery_image_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261001_000001_create_account_table::Migration),
            Box::new(m20261001_000002_create_auth_token_table::Migration),
            Box::new(m20261001_000003_create_tournament_table::Migration),
            Box::new(m20261001_000004_create_team_table::Migration),
            Box::new(m20261001_000005_create_participant_table::Migration),
            Box::new(m20261001_000006_create_classification_table::Migration),
            Box::new(m20261001_000007_create_game_match_table::Migration),
            Box::new(m20261001_000008_create_match_series_table::Migration),
            Box::new(m20261001_000009_create_match_series_match_table::Migration),
            Box::new(m20261001_000010_create_gallery_image_table::Migration),
        ]
    }
}
