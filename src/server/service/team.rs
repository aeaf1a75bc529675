//! Team administration and team lookups shared by other services.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{team::TeamRepository, tournament::TournamentRepository},
    error::{internal::InternalError, AppError},
    model::team::{CreateTeamParams, Team, TeamDetail, UpdateTeamParams},
};

/// Error message for a team name already used in the tournament.
pub const DUPLICATE_TEAM_NAME: &str = "A team with this name already exists in this tournament";

pub struct TeamService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeamService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists teams by name, optionally limited to a group and/or tournament.
    pub async fn get_filtered(
        &self,
        group: Option<&str>,
        tournament_id: Option<i32>,
    ) -> Result<Vec<TeamDetail>, AppError> {
        let repo = TeamRepository::new(self.db);
        let teams = repo.get_filtered(group, tournament_id).await?;

        Ok(repo.with_details(teams).await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<TeamDetail>, AppError> {
        match TeamRepository::new(self.db).find_by_id(id).await? {
            Some(team) => Ok(Some(self.detail(team).await?)),
            None => Ok(None),
        }
    }

    /// Creates a team without an owning account.
    ///
    /// # Returns
    /// - `Ok(TeamDetail)` - The created team
    /// - `Err(AppError::BadRequest)` - Blank team name
    /// - `Err(AppError::NotFound)` - Tournament does not exist
    /// - `Err(AppError::Conflict)` - The tournament already has a team with this name
    pub async fn create(&self, params: CreateTeamParams) -> Result<TeamDetail, AppError> {
        self.check_name(&params.name, params.tournament_id, None)
            .await?;

        let team = TeamRepository::new(self.db)
            .create(params)
            .await
            .map_err(|e| AppError::conflict_on_duplicate(e, DUPLICATE_TEAM_NAME))?;

        self.detail(team).await
    }

    /// Replaces a team's name, tournament and group.
    ///
    /// # Returns
    /// - `Ok(Some(TeamDetail))` - The updated team
    /// - `Ok(None)` - No team with that ID
    /// - `Err(AppError)` - Same validation as `create`
    pub async fn update(&self, params: UpdateTeamParams) -> Result<Option<TeamDetail>, AppError> {
        let repo = TeamRepository::new(self.db);

        if repo.find_by_id(params.id).await?.is_none() {
            return Ok(None);
        }

        self.check_name(&params.name, params.tournament_id, Some(params.id))
            .await?;

        match repo
            .update(params)
            .await
            .map_err(|e| AppError::conflict_on_duplicate(e, DUPLICATE_TEAM_NAME))?
        {
            Some(team) => Ok(Some(self.detail(team).await?)),
            None => Ok(None),
        }
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        Ok(TeamRepository::new(self.db).delete(id).await?)
    }

    /// Teams the given team can report matches against.
    pub async fn opponents(&self, team: &Team) -> Result<Vec<Team>, AppError> {
        Ok(TeamRepository::new(self.db).get_opponents(team).await?)
    }

    /// Loads the tournament name and contact number of a single team.
    pub async fn detail(&self, team: Team) -> Result<TeamDetail, AppError> {
        let id = team.id;

        TeamRepository::new(self.db)
            .with_details(vec![team])
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| InternalError::MissingAfterWrite { entity: "team", id }.into())
    }

    async fn check_name(
        &self,
        name: &str,
        tournament_id: i32,
        exclude_id: Option<i32>,
    ) -> Result<(), AppError> {
        if name.is_empty() {
            return Err(AppError::BadRequest("Team name is required".to_string()));
        }

        if TournamentRepository::new(self.db)
            .find_by_id(tournament_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Tournament not found".to_string()));
        }

        if TeamRepository::new(self.db)
            .name_taken(name, tournament_id, exclude_id)
            .await?
        {
            return Err(AppError::Conflict(DUPLICATE_TEAM_NAME.to_string()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{builder::TestBuilder, factory};

    fn create_params(tournament_id: i32, name: &str) -> CreateTeamParams {
        CreateTeamParams {
            account_id: None,
            tournament_id,
            name: name.to_string(),
            group: None,
        }
    }

    /// Tests that team names only clash inside the same tournament.
    ///
    /// Expected: Ok in a second tournament, Err(Conflict) in the first
    #[tokio::test]
    async fn same_name_allowed_in_other_tournament() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_tournament_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let first = factory::create_tournament(db).await?;
        let second = factory::create_tournament(db).await?;

        let service = TeamService::new(db);
        service.create(create_params(first.id, "Los Pumas")).await?;

        let elsewhere = service.create(create_params(second.id, "Los Pumas")).await?;
        assert_eq!(elsewhere.tournament_name, second.name);

        let duplicate = service.create(create_params(first.id, "Los Pumas")).await;
        assert!(matches!(duplicate, Err(AppError::Conflict(_))));

        Ok(())
    }

    /// Tests renaming a team onto another team's name.
    ///
    /// Expected: Err(Conflict), while keeping its own name is fine
    #[tokio::test]
    async fn update_checks_name_clash() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_tournament_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let (tournament, team, rival) = factory::helpers::create_opponents(db, None).await?;

        let service = TeamService::new(db);
        let unchanged = service
            .update(UpdateTeamParams {
                id: team.id,
                tournament_id: tournament.id,
                name: team.name.clone(),
                group: Some("A".to_string()),
            })
            .await?;
        assert_eq!(
            unchanged.and_then(|t| t.team.group).as_deref(),
            Some("A")
        );

        let clash = service
            .update(UpdateTeamParams {
                id: team.id,
                tournament_id: tournament.id,
                name: rival.name,
                group: None,
            })
            .await;
        assert!(matches!(clash, Err(AppError::Conflict(_))));

        Ok(())
    }

    /// Tests creating a team in a tournament that does not exist.
    ///
    /// Expected: Err(NotFound)
    #[tokio::test]
    async fn create_requires_tournament() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_tournament_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let result = TeamService::new(db).create(create_params(999, "Ghosts")).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));

        Ok(())
    }
}
