//! Match series administration.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{game_match::GameMatchRepository, match_series::MatchSeriesRepository},
    error::AppError,
    model::match_series::{MatchSeries, MatchSeriesDetail, MatchSeriesParams},
};

pub struct MatchSeriesService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MatchSeriesService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Series newest first, optionally filtered on the active flag.
    pub async fn get_all(&self, active: Option<bool>) -> Result<Vec<MatchSeriesDetail>, AppError> {
        let series = MatchSeriesRepository::new(self.db).get_all(active).await?;

        let mut details = Vec::with_capacity(series.len());
        for s in series {
            details.push(self.detail(s).await?);
        }

        Ok(details)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<MatchSeriesDetail>, AppError> {
        match MatchSeriesRepository::new(self.db).find_by_id(id).await? {
            Some(series) => Ok(Some(self.detail(series).await?)),
            None => Ok(None),
        }
    }

    pub async fn create(&self, params: MatchSeriesParams) -> Result<MatchSeriesDetail, AppError> {
        validate(&params)?;

        let series = MatchSeriesRepository::new(self.db).create(params).await?;

        self.detail(series).await
    }

    pub async fn update(
        &self,
        id: i32,
        params: MatchSeriesParams,
    ) -> Result<Option<MatchSeriesDetail>, AppError> {
        validate(&params)?;

        match MatchSeriesRepository::new(self.db).update(id, params).await? {
            Some(series) => Ok(Some(self.detail(series).await?)),
            None => Ok(None),
        }
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        Ok(MatchSeriesRepository::new(self.db).delete(id).await?)
    }

    /// Adds a match to a series. Adding a match twice keeps a single link.
    ///
    /// # Returns
    /// - `Ok(())` - Match is in the series
    /// - `Err(AppError::NotFound)` - Series or match does not exist
    pub async fn add_match(&self, series_id: i32, match_id: i32) -> Result<(), AppError> {
        self.require_series(series_id).await?;

        if GameMatchRepository::new(self.db)
            .find_by_id(match_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Match not found".to_string()));
        }

        MatchSeriesRepository::new(self.db)
            .add_match(series_id, match_id)
            .await?;

        Ok(())
    }

    /// Removes a match from a series.
    ///
    /// # Returns
    /// - `Ok(())` - Match removed
    /// - `Err(AppError::NotFound)` - Series does not exist or the match is not in it
    pub async fn remove_match(&self, series_id: i32, match_id: i32) -> Result<(), AppError> {
        self.require_series(series_id).await?;

        if !MatchSeriesRepository::new(self.db)
            .remove_match(series_id, match_id)
            .await?
        {
            return Err(AppError::NotFound(
                "Match is not part of this series".to_string(),
            ));
        }

        Ok(())
    }

    async fn require_series(&self, id: i32) -> Result<MatchSeries, AppError> {
        MatchSeriesRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Match series not found".to_string()))
    }

    async fn detail(&self, series: MatchSeries) -> Result<MatchSeriesDetail, AppError> {
        let match_ids = MatchSeriesRepository::new(self.db)
            .get_match_ids(series.id)
            .await?;

        let match_repo = GameMatchRepository::new(self.db);
        let matches = match_repo.get_by_ids(match_ids).await?;
        let matches = match_repo.with_details(matches).await?;

        Ok(MatchSeriesDetail { series, matches })
    }
}

fn validate(params: &MatchSeriesParams) -> Result<(), AppError> {
    if params.name.is_empty() {
        return Err(AppError::BadRequest("Series name is required".to_string()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{builder::TestBuilder, factory};

    /// Tests the series match counters.
    ///
    /// Expected: Two matches in total, one of them finished
    #[tokio::test]
    async fn counts_total_and_finished_matches() -> Result<(), AppError> {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let (_tournament, home, away) = factory::helpers::create_opponents(db, None).await?;
        let finished = factory::game_match::MatchFactory::new(db, home.id, away.id)
            .finished(true)
            .build()
            .await?;
        let pending = factory::create_match(db, home.id, away.id).await?;
        let series = factory::create_match_series(db).await?;

        let service = MatchSeriesService::new(db);
        service.add_match(series.id, finished.id).await?;
        service.add_match(series.id, pending.id).await?;
        service.add_match(series.id, pending.id).await?;

        let detail = service.get_by_id(series.id).await?.unwrap();
        assert_eq!(detail.total_matches(), 2);
        assert_eq!(detail.finished_matches(), 1);

        service.remove_match(series.id, pending.id).await?;
        let detail = service.get_by_id(series.id).await?.unwrap();
        assert_eq!(detail.total_matches(), 1);

        Ok(())
    }

    /// Tests adding a match that does not exist.
    ///
    /// Expected: Err(NotFound)
    #[tokio::test]
    async fn add_requires_existing_match() -> Result<(), AppError> {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let series = factory::create_match_series(db).await?;

        let result = MatchSeriesService::new(db).add_match(series.id, 999).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));

        Ok(())
    }
}
