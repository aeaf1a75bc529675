//! Participant administration.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{participant::ParticipantRepository, team::TeamRepository},
    error::{internal::InternalError, AppError},
    model::participant::{Participant, ParticipantDetail, ParticipantParams},
};

pub struct ParticipantService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ParticipantService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists participants by name.
    pub async fn get_all(&self, active_only: bool) -> Result<Vec<ParticipantDetail>, AppError> {
        let repo = ParticipantRepository::new(self.db);
        let participants = repo.get_all(active_only).await?;

        Ok(repo.with_details(participants).await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<ParticipantDetail>, AppError> {
        match ParticipantRepository::new(self.db).find_by_id(id).await? {
            Some(participant) => Ok(Some(self.detail(participant).await?)),
            None => Ok(None),
        }
    }

    /// Adds a participant to a team.
    ///
    /// # Returns
    /// - `Ok(ParticipantDetail)` - The created participant
    /// - `Err(AppError::BadRequest)` - Blank name
    /// - `Err(AppError::NotFound)` - Team does not exist
    pub async fn create(&self, params: ParticipantParams) -> Result<ParticipantDetail, AppError> {
        self.validate(&params).await?;

        let participant = ParticipantRepository::new(self.db).create(params).await?;

        self.detail(participant).await
    }

    pub async fn update(
        &self,
        id: i32,
        params: ParticipantParams,
    ) -> Result<Option<ParticipantDetail>, AppError> {
        let repo = ParticipantRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Ok(None);
        }

        self.validate(&params).await?;

        match repo.update(id, params).await? {
            Some(participant) => Ok(Some(self.detail(participant).await?)),
            None => Ok(None),
        }
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        Ok(ParticipantRepository::new(self.db).delete(id).await?)
    }

    async fn validate(&self, params: &ParticipantParams) -> Result<(), AppError> {
        if params.name.is_empty() {
            return Err(AppError::BadRequest(
                "Participant name is required".to_string(),
            ));
        }

        if TeamRepository::new(self.db)
            .find_by_id(params.team_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Team not found".to_string()));
        }

        Ok(())
    }

    async fn detail(&self, participant: Participant) -> Result<ParticipantDetail, AppError> {
        let id = participant.id;

        ParticipantRepository::new(self.db)
            .with_details(vec![participant])
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| {
                InternalError::MissingAfterWrite {
                    entity: "participant",
                    id,
                }
                .into()
            })
    }
}
