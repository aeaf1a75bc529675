//! Tournament administration and overviews.

use std::collections::BTreeMap;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{team::TeamRepository, tournament::TournamentRepository},
    error::AppError,
    model::tournament::{
        Tournament, TournamentOverview, TournamentParams, TournamentTeams, NO_GROUP_LABEL,
    },
};

const DUPLICATE_TOURNAMENT_NAME: &str = "A tournament with this name already exists";

pub struct TournamentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TournamentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// All tournaments by start date.
    pub async fn get_all(&self) -> Result<Vec<Tournament>, AppError> {
        Ok(TournamentRepository::new(self.db).get_all().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Tournament>, AppError> {
        Ok(TournamentRepository::new(self.db).find_by_id(id).await?)
    }

    /// Tournaments a team can join, newest first, with their team counts.
    pub async fn get_available(&self) -> Result<Vec<(Tournament, u64)>, AppError> {
        let team_repo = TeamRepository::new(self.db);
        let tournaments = TournamentRepository::new(self.db)
            .get_all_newest_first()
            .await?;

        let mut available = Vec::with_capacity(tournaments.len());
        for tournament in tournaments {
            let teams_count = team_repo.count_by_tournament(tournament.id).await?;
            available.push((tournament, teams_count));
        }

        Ok(available)
    }

    /// Admin overview: every tournament, newest first, with team counts per group.
    pub async fn get_overviews(&self) -> Result<Vec<TournamentOverview>, AppError> {
        let team_repo = TeamRepository::new(self.db);
        let tournaments = TournamentRepository::new(self.db)
            .get_all_newest_first()
            .await?;

        let mut overviews = Vec::with_capacity(tournaments.len());
        for tournament in tournaments {
            let teams = team_repo.get_by_tournament(tournament.id).await?;

            let mut teams_by_group: BTreeMap<String, u64> = BTreeMap::new();
            for team in &teams {
                let label = team.group_label().unwrap_or(NO_GROUP_LABEL);
                *teams_by_group.entry(label.to_string()).or_default() += 1;
            }

            overviews.push(TournamentOverview {
                tournament,
                teams_count: teams.len() as u64,
                teams_by_group,
            });
        }

        Ok(overviews)
    }

    /// Teams of a tournament split by group.
    ///
    /// # Returns
    /// - `Ok(Some(TournamentTeams))` - Tournament found
    /// - `Ok(None)` - No tournament with that ID
    pub async fn get_teams(&self, id: i32) -> Result<Option<TournamentTeams>, AppError> {
        let Some(tournament) = TournamentRepository::new(self.db).find_by_id(id).await? else {
            return Ok(None);
        };

        let team_repo = TeamRepository::new(self.db);
        let teams = team_repo.get_by_tournament(id).await?;
        let teams = team_repo.with_details(teams).await?;

        Ok(Some(TournamentTeams::from_teams(tournament, teams)))
    }

    /// Creates a tournament.
    ///
    /// # Returns
    /// - `Ok(Tournament)` - The created tournament
    /// - `Err(AppError::BadRequest)` - Blank name or end date before start date
    /// - `Err(AppError::Conflict)` - Name already used
    pub async fn create(&self, params: TournamentParams) -> Result<Tournament, AppError> {
        self.validate(&params, None).await?;

        let tournament = TournamentRepository::new(self.db)
            .create(params)
            .await
            .map_err(|e| AppError::conflict_on_duplicate(e, DUPLICATE_TOURNAMENT_NAME))?;

        tracing::info!(
            tournament_id = tournament.id,
            name = %tournament.name,
            "Created tournament"
        );

        Ok(tournament)
    }

    /// Replaces a tournament. Same validation as `create`.
    pub async fn update(
        &self,
        id: i32,
        params: TournamentParams,
    ) -> Result<Option<Tournament>, AppError> {
        let repo = TournamentRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Ok(None);
        }

        self.validate(&params, Some(id)).await?;

        repo.update(id, params)
            .await
            .map_err(|e| AppError::conflict_on_duplicate(e, DUPLICATE_TOURNAMENT_NAME))
    }

    /// Deletes a tournament and all of its teams.
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        Ok(TournamentRepository::new(self.db).delete(id).await?)
    }

    async fn validate(
        &self,
        params: &TournamentParams,
        exclude_id: Option<i32>,
    ) -> Result<(), AppError> {
        if params.name.is_empty() {
            return Err(AppError::BadRequest(
                "Tournament name is required".to_string(),
            ));
        }

        if params.estimated_end_date < params.start_date {
            return Err(AppError::BadRequest(
                "Estimated end date cannot be before the start date".to_string(),
            ));
        }

        if TournamentRepository::new(self.db)
            .name_taken(&params.name, exclude_id)
            .await?
        {
            return Err(AppError::Conflict(DUPLICATE_TOURNAMENT_NAME.to_string()));
        }

        Ok(())
    }
}
