//! Match factory for creating test match entities.
//!
//! Inserting a match here does not touch the standings; tests that need
//! classifications updated go through the service layer instead.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test matches with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let game = MatchFactory::new(&db, home.id, away.id)
///     .score(3, 1)
///     .finished(true)
///     .build()
///     .await?;
/// ```
pub struct MatchFactory<'a> {
    db: &'a DatabaseConnection,
    team1_id: i32,
    team2_id: i32,
    goals1: i32,
    goals2: i32,
    is_finished: bool,
    played_at: DateTime<Utc>,
}

impl<'a> MatchFactory<'a> {
    /// Creates a new MatchFactory for an unfinished 0-0 match played now.
    pub fn new(db: &'a DatabaseConnection, team1_id: i32, team2_id: i32) -> Self {
        Self {
            db,
            team1_id,
            team2_id,
            goals1: 0,
            goals2: 0,
            is_finished: false,
            played_at: Utc::now(),
        }
    }

    /// Sets the goals scored by each side.
    pub fn score(mut self, goals1: i32, goals2: i32) -> Self {
        self.goals1 = goals1;
        self.goals2 = goals2;
        self
    }

    pub fn finished(mut self, is_finished: bool) -> Self {
        self.is_finished = is_finished;
        self
    }

    pub fn played_at(mut self, played_at: DateTime<Utc>) -> Self {
        self.played_at = played_at;
        self
    }

    /// Builds and inserts the match entity into the database.
    pub async fn build(self) -> Result<entity::game_match::Model, DbErr> {
        entity::game_match::ActiveModel {
            id: ActiveValue::NotSet,
            team1_id: ActiveValue::Set(self.team1_id),
            team2_id: ActiveValue::Set(self.team2_id),
            goals1: ActiveValue::Set(self.goals1),
            goals2: ActiveValue::Set(self.goals2),
            is_finished: ActiveValue::Set(self.is_finished),
            played_at: ActiveValue::Set(self.played_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an unfinished 0-0 match between two teams.
pub async fn create_match(
    db: &DatabaseConnection,
    team1_id: i32,
    team2_id: i32,
) -> Result<entity::game_match::Model, DbErr> {
    MatchFactory::new(db, team1_id, team2_id).build().await
}
