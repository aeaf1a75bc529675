//! Tournament factory for creating test tournament entities.

use crate::factory::helpers::next_id;
use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test tournaments with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let tournament = TournamentFactory::new(&db)
///     .name("Summer Cup")
///     .start_date(NaiveDate::from_ymd_opt(2026, 6, 1).unwrap())
///     .build()
///     .await?;
/// ```
pub struct TournamentFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    start_date: NaiveDate,
    estimated_end_date: NaiveDate,
}

impl<'a> TournamentFactory<'a> {
    /// Creates a new TournamentFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Tournament {id}"`
    /// - start_date: today
    /// - estimated_end_date: 30 days from today
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let today = Utc::now().date_naive();
        Self {
            db,
            name: format!("Tournament {}", id),
            start_date: today,
            estimated_end_date: today + chrono::Duration::days(30),
        }
    }

    /// Sets the tournament name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the start date.
    pub fn start_date(mut self, start_date: NaiveDate) -> Self {
        self.start_date = start_date;
        self
    }

    /// Sets the estimated end date.
    pub fn estimated_end_date(mut self, estimated_end_date: NaiveDate) -> Self {
        self.estimated_end_date = estimated_end_date;
        self
    }

    /// Builds and inserts the tournament entity into the database.
    pub async fn build(self) -> Result<entity::tournament::Model, DbErr> {
        entity::tournament::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            start_date: ActiveValue::Set(self.start_date),
            estimated_end_date: ActiveValue::Set(self.estimated_end_date),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a tournament with default values.
pub async fn create_tournament(
    db: &DatabaseConnection,
) -> Result<entity::tournament::Model, DbErr> {
    TournamentFactory::new(db).build().await
}
