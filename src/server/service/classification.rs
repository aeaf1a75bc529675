//! Standings table administration and the ranking pass.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        classification::ClassificationRepository, team::TeamRepository,
        tournament::TournamentRepository,
    },
    error::AppError,
    model::classification::{Classification, ClassificationDetail},
};

pub struct ClassificationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ClassificationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Standings in table order, optionally limited to a group and/or tournament.
    pub async fn get_table(
        &self,
        group: Option<&str>,
        tournament_id: Option<i32>,
    ) -> Result<Vec<ClassificationDetail>, AppError> {
        Ok(ClassificationRepository::new(self.db)
            .get_table(group, tournament_id)
            .await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<ClassificationDetail>, AppError> {
        let repo = ClassificationRepository::new(self.db);

        match repo.find_by_id(id).await? {
            Some(classification) => Ok(Some(repo.with_detail(classification).await?)),
            None => Ok(None),
        }
    }

    /// Creates an all-zero classification for a team.
    ///
    /// # Returns
    /// - `Ok(ClassificationDetail)` - The created row
    /// - `Err(AppError::NotFound)` - Team does not exist
    /// - `Err(AppError::Conflict)` - Team already has a classification
    pub async fn create(
        &self,
        team_id: i32,
        position: Option<i32>,
    ) -> Result<ClassificationDetail, AppError> {
        if TeamRepository::new(self.db)
            .find_by_id(team_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Team not found".to_string()));
        }

        let repo = ClassificationRepository::new(self.db);

        if repo.find_by_team(team_id).await?.is_some() {
            return Err(AppError::Conflict(
                "Team already has a classification".to_string(),
            ));
        }

        let classification = repo.create(team_id, position).await?;

        Ok(repo.with_detail(classification).await?)
    }

    /// Sets the table position. Counters are only changed by match results.
    pub async fn update_position(
        &self,
        id: i32,
        position: Option<i32>,
    ) -> Result<Option<ClassificationDetail>, AppError> {
        let repo = ClassificationRepository::new(self.db);

        match repo.set_position(id, position).await? {
            Some(classification) => Ok(Some(repo.with_detail(classification).await?)),
            None => Ok(None),
        }
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        Ok(ClassificationRepository::new(self.db).delete(id).await?)
    }

    /// Writes 1-based positions for a tournament's classifications in table order.
    ///
    /// # Returns
    /// - `Ok(Vec<ClassificationDetail>)` - The ranked table
    /// - `Err(AppError::NotFound)` - Tournament does not exist
    pub async fn assign_positions(
        &self,
        tournament_id: i32,
    ) -> Result<Vec<ClassificationDetail>, AppError> {
        if TournamentRepository::new(self.db)
            .find_by_id(tournament_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Tournament not found".to_string()));
        }

        let txn = self.db.begin().await?;
        let repo = ClassificationRepository::new(&txn);

        let mut table = repo.get_table(None, Some(tournament_id)).await?;
        table.sort_by(|a, b| Classification::table_order(&a.classification, &b.classification));
        for (index, row) in table.iter().enumerate() {
            repo.set_position(row.classification.id, Some(index as i32 + 1))
                .await?;
        }

        txn.commit().await?;

        tracing::info!(
            tournament_id,
            ranked = table.len(),
            "Assigned table positions"
        );

        self.get_table(None, Some(tournament_id)).await
    }
}
