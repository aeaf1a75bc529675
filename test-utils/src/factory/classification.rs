//! Classification factory for creating standings rows.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating classification rows with preset counters.
///
/// # Example
///
/// ```rust,ignore
/// let row = ClassificationFactory::new(&db, team.id)
///     .points(6)
///     .goals_for(4)
///     .build()
///     .await?;
/// ```
pub struct ClassificationFactory<'a> {
    db: &'a DatabaseConnection,
    team_id: i32,
    points: i32,
    games_played: i32,
    games_won: i32,
    games_lost: i32,
    goals_for: i32,
    goals_against: i32,
    position: Option<i32>,
}

impl<'a> ClassificationFactory<'a> {
    /// Creates a new ClassificationFactory with every counter at zero and no position.
    pub fn new(db: &'a DatabaseConnection, team_id: i32) -> Self {
        Self {
            db,
            team_id,
            points: 0,
            games_played: 0,
            games_won: 0,
            games_lost: 0,
            goals_for: 0,
            goals_against: 0,
            position: None,
        }
    }

    pub fn points(mut self, points: i32) -> Self {
        self.points = points;
        self
    }

    pub fn games_played(mut self, games_played: i32) -> Self {
        self.games_played = games_played;
        self
    }

    pub fn games_won(mut self, games_won: i32) -> Self {
        self.games_won = games_won;
        self
    }

    pub fn games_lost(mut self, games_lost: i32) -> Self {
        self.games_lost = games_lost;
        self
    }

    pub fn goals_for(mut self, goals_for: i32) -> Self {
        self.goals_for = goals_for;
        self
    }

    pub fn goals_against(mut self, goals_against: i32) -> Self {
        self.goals_against = goals_against;
        self
    }

    pub fn position(mut self, position: Option<i32>) -> Self {
        self.position = position;
        self
    }

    /// Builds and inserts the classification entity into the database.
    pub async fn build(self) -> Result<entity::classification::Model, DbErr> {
        entity::classification::ActiveModel {
            id: ActiveValue::NotSet,
            team_id: ActiveValue::Set(self.team_id),
            points: ActiveValue::Set(self.points),
            games_played: ActiveValue::Set(self.games_played),
            games_won: ActiveValue::Set(self.games_won),
            games_lost: ActiveValue::Set(self.games_lost),
            goals_for: ActiveValue::Set(self.goals_for),
            goals_against: ActiveValue::Set(self.goals_against),
            position: ActiveValue::Set(self.position),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an all-zero classification for the given team.
pub async fn create_classification(
    db: &DatabaseConnection,
    team_id: i32,
) -> Result<entity::classification::Model, DbErr> {
    ClassificationFactory::new(db, team_id).build().await
}
