//! Standings updates for finished matches.
//!
//! Points: a win is worth 3, a draw 1, a loss nothing. Draws are not counted separately;
//! they are the games played that were neither won nor lost.

use sea_orm::ConnectionTrait;

use crate::server::{
    data::classification::ClassificationRepository,
    error::AppError,
    model::{
        classification::{Classification, ResultDelta},
        game_match::GameMatch,
    },
};

/// Applies match results to team classifications.
///
/// Generic over the connection so callers can run it inside the transaction that also
/// stores the match. Run against a plain connection, the two sides of a match are not
/// applied atomically.
pub struct StandingsService<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StandingsService<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Records one side of a finished match for a team.
    ///
    /// Creates the team's classification on its first result.
    ///
    /// # Arguments
    /// - `team_id` - Team whose standings change
    /// - `goals_for` - Goals the team scored
    /// - `goals_against` - Goals the team conceded
    ///
    /// # Returns
    /// - `Ok(Classification)` - The team's classification after the update
    /// - `Err(AppError::DbErr)` - Database error, including an unknown team
    pub async fn apply_result(
        &self,
        team_id: i32,
        goals_for: i32,
        goals_against: i32,
    ) -> Result<Classification, AppError> {
        let delta = ResultDelta::from_score(goals_for, goals_against);
        let classification = ClassificationRepository::new(self.db)
            .apply_delta(team_id, &delta)
            .await?;

        tracing::debug!(
            team_id,
            goals_for,
            goals_against,
            points = classification.points,
            drawn = classification.games_drawn(),
            "Applied result to classification"
        );

        Ok(classification)
    }

    /// Records both sides of a finished match.
    ///
    /// # Returns
    /// - `Ok((home, away))` - Classifications of `team1` and `team2` after the update
    /// - `Err(AppError)` - Database error; inside a transaction neither side persists
    pub async fn apply_match(
        &self,
        game: &GameMatch,
    ) -> Result<(Classification, Classification), AppError> {
        let home = self
            .apply_result(game.team1_id, game.goals1, game.goals2)
            .await?;
        let away = self
            .apply_result(game.team2_id, game.goals2, game.goals1)
            .await?;

        Ok((home, away))
    }
}
