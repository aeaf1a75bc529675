//! Match recording and administration.
//!
//! A match updates the standings exactly once: when it is stored as finished, or when an
//! unfinished match is first marked finished. From then on its teams and score are
//! frozen, and deleting it leaves the standings as they are.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{game_match::GameMatchRepository, team::TeamRepository},
    error::{internal::InternalError, AppError},
    model::{
        auth::LoadMatchParams,
        game_match::{GameMatch, MatchDetail, MatchParams},
        team::Team,
    },
    service::standings::StandingsService,
};

/// Number of matches returned by the recent matches listing.
pub const RECENT_MATCHES: u64 = 10;

/// Most goals one side can score in a single match.
pub const MAX_GOALS: i32 = 999;

pub struct GameMatchService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GameMatchService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a finished match reported by a team against one of its opponents.
    ///
    /// The match and both standings updates commit together.
    ///
    /// # Arguments
    /// - `team` - The reporting team, always stored as `team1`
    /// - `params` - Opponent and score from the reporting team's point of view
    ///
    /// # Returns
    /// - `Ok(MatchDetail)` - The stored match
    /// - `Err(AppError::BadRequest)` - Negative goals or the team played itself
    /// - `Err(AppError::NotFound)` - Opponent does not exist
    /// - `Err(AppError::Conflict)` - Either team has no group, or they are not in the same
    ///   tournament and group
    pub async fn load_match(
        &self,
        team: &Team,
        params: LoadMatchParams,
    ) -> Result<MatchDetail, AppError> {
        validate_score(params.user_goals, params.opponent_goals)?;

        if params.opponent_team_id == team.id {
            return Err(AppError::BadRequest(
                "A team cannot play against itself".to_string(),
            ));
        }

        let opponent = TeamRepository::new(self.db)
            .find_by_id(params.opponent_team_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Opponent team not found".to_string()))?;

        let Some(group) = team.group_label() else {
            return Err(AppError::Conflict(
                "Your team has not been assigned to a group yet".to_string(),
            ));
        };

        if opponent.tournament_id != team.tournament_id || opponent.group_label() != Some(group)
        {
            return Err(AppError::Conflict(
                "Opponent team is not in your group".to_string(),
            ));
        }

        let game = self
            .record(MatchParams::finished(
                team.id,
                opponent.id,
                params.user_goals,
                params.opponent_goals,
            ))
            .await?;

        tracing::info!(
            match_id = game.id,
            team_id = team.id,
            opponent_id = opponent.id,
            "Team loaded match result"
        );

        self.detail(game).await
    }

    /// Matches the team played on either side, latest first.
    pub async fn my_matches(&self, team_id: i32) -> Result<Vec<MatchDetail>, AppError> {
        let repo = GameMatchRepository::new(self.db);
        let matches = repo.get_for_team(team_id).await?;

        Ok(repo.with_details(matches).await?)
    }

    pub async fn get_all(&self) -> Result<Vec<MatchDetail>, AppError> {
        let repo = GameMatchRepository::new(self.db);
        let matches = repo.get_all().await?;

        Ok(repo.with_details(matches).await?)
    }

    pub async fn get_recent(&self) -> Result<Vec<MatchDetail>, AppError> {
        let repo = GameMatchRepository::new(self.db);
        let matches = repo.get_recent(RECENT_MATCHES).await?;

        Ok(repo.with_details(matches).await?)
    }

    pub async fn get_finished(&self) -> Result<Vec<MatchDetail>, AppError> {
        let repo = GameMatchRepository::new(self.db);
        let matches = repo.get_finished().await?;

        Ok(repo.with_details(matches).await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<MatchDetail>, AppError> {
        match GameMatchRepository::new(self.db).find_by_id(id).await? {
            Some(game) => Ok(Some(self.detail(game).await?)),
            None => Ok(None),
        }
    }

    /// Creates a match, updating the standings if it is created as finished.
    ///
    /// # Returns
    /// - `Ok(MatchDetail)` - The stored match
    /// - `Err(AppError::BadRequest)` - Negative goals or the same team on both sides
    /// - `Err(AppError::NotFound)` - Either team does not exist
    /// - `Err(AppError::Conflict)` - Teams play in different tournaments
    pub async fn create(&self, params: MatchParams) -> Result<MatchDetail, AppError> {
        self.validate(&params).await?;

        let game = self.record(params).await?;

        self.detail(game).await
    }

    /// Replaces a match.
    ///
    /// Marking an unfinished match as finished applies its result to the standings. The
    /// finished flag is checked and written inside the same transaction, so concurrent
    /// updates finishing one match apply its result once.
    ///
    /// # Returns
    /// - `Ok(Some(MatchDetail))` - The updated match
    /// - `Ok(None)` - No match with that ID
    /// - `Err(AppError::Conflict)` - The match is finished and the update would change its
    ///   teams, score or finished flag
    pub async fn update(
        &self,
        id: i32,
        params: MatchParams,
    ) -> Result<Option<MatchDetail>, AppError> {
        self.validate(&params).await?;

        let txn = self.db.begin().await?;
        let repo = GameMatchRepository::new(&txn);

        if repo.update_if_unfinished(id, params.clone()).await? {
            let game = repo
                .find_by_id(id)
                .await?
                .ok_or(InternalError::MissingAfterWrite {
                    entity: "game_match",
                    id,
                })?;

            if game.is_finished {
                StandingsService::new(&txn).apply_match(&game).await?;
            }

            txn.commit().await?;

            return Ok(Some(self.detail(game).await?));
        }

        let Some(existing) = repo.find_by_id(id).await? else {
            return Ok(None);
        };

        if !keeps_result(&existing, &params) {
            return Err(AppError::Conflict(
                "A finished match cannot be changed".to_string(),
            ));
        }

        let game = repo
            .update(id, params)
            .await?
            .ok_or(InternalError::MissingAfterWrite {
                entity: "game_match",
                id,
            })?;

        txn.commit().await?;

        Ok(Some(self.detail(game).await?))
    }

    /// Deletes a match. Standings already updated by it are kept.
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        Ok(GameMatchRepository::new(self.db).delete(id).await?)
    }

    /// Stores a match and, if finished, its standings update in one transaction.
    async fn record(&self, params: MatchParams) -> Result<GameMatch, AppError> {
        let txn = self.db.begin().await?;

        let game = GameMatchRepository::new(&txn).create(params).await?;
        if game.is_finished {
            StandingsService::new(&txn).apply_match(&game).await?;
        }

        txn.commit().await?;

        Ok(game)
    }

    async fn validate(&self, params: &MatchParams) -> Result<(), AppError> {
        validate_score(params.goals1, params.goals2)?;

        if params.team1_id == params.team2_id {
            return Err(AppError::BadRequest(
                "A team cannot play against itself".to_string(),
            ));
        }

        let team_repo = TeamRepository::new(self.db);
        let team1 = team_repo.find_by_id(params.team1_id).await?;
        let team2 = team_repo.find_by_id(params.team2_id).await?;

        let (Some(team1), Some(team2)) = (team1, team2) else {
            return Err(AppError::NotFound("Team not found".to_string()));
        };

        if team1.tournament_id != team2.tournament_id {
            return Err(AppError::Conflict(
                "Teams play in different tournaments".to_string(),
            ));
        }

        Ok(())
    }

    async fn detail(&self, game: GameMatch) -> Result<MatchDetail, AppError> {
        let id = game.id;

        GameMatchRepository::new(self.db)
            .with_details(vec![game])
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| {
                InternalError::MissingAfterWrite {
                    entity: "game_match",
                    id,
                }
                .into()
            })
    }
}

fn validate_score(goals1: i32, goals2: i32) -> Result<(), AppError> {
    if goals1 < 0 || goals2 < 0 {
        return Err(AppError::BadRequest("Goals cannot be negative".to_string()));
    }

    if goals1 > MAX_GOALS || goals2 > MAX_GOALS {
        return Err(AppError::BadRequest(format!(
            "Goals cannot exceed {}",
            MAX_GOALS
        )));
    }

    Ok(())
}

/// Whether an update leaves a finished match's result as it is.
fn keeps_result(existing: &GameMatch, params: &MatchParams) -> bool {
    params.is_finished
        && existing.team1_id == params.team1_id
        && existing.team2_id == params.team2_id
        && existing.goals1 == params.goals1
        && existing.goals2 == params.goals2
}
