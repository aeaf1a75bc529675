//! Match series factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating match series with customizable fields.
pub struct MatchSeriesFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    description: String,
    is_active: bool,
}

impl<'a> MatchSeriesFactory<'a> {
    /// Creates a new MatchSeriesFactory for an active series named `"Series {id}"`.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Series {}", id),
            description: String::new(),
            is_active: true,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Builds and inserts the series into the database.
    pub async fn build(self) -> Result<entity::match_series::Model, DbErr> {
        entity::match_series::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            is_active: ActiveValue::Set(self.is_active),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active, empty match series.
pub async fn create_match_series(
    db: &DatabaseConnection,
) -> Result<entity::match_series::Model, DbErr> {
    MatchSeriesFactory::new(db).build().await
}
