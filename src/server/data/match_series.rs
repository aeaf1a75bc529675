//! Match series data repository, including the series/match join table.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::match_series::{MatchSeries, MatchSeriesParams};

pub struct MatchSeriesRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MatchSeriesRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: MatchSeriesParams) -> Result<MatchSeries, DbErr> {
        let entity = entity::match_series::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            is_active: ActiveValue::Set(params.is_active),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(MatchSeries::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<MatchSeries>, DbErr> {
        let entity = entity::prelude::MatchSeries::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(MatchSeries::from_entity))
    }

    /// Series newest first, optionally filtered on the active flag.
    pub async fn get_all(&self, active: Option<bool>) -> Result<Vec<MatchSeries>, DbErr> {
        let mut query = entity::prelude::MatchSeries::find();

        if let Some(active) = active {
            query = query.filter(entity::match_series::Column::IsActive.eq(active));
        }

        let entities = query
            .order_by_desc(entity::match_series::Column::CreatedAt)
            .order_by_desc(entity::match_series::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(MatchSeries::from_entity).collect())
    }

    pub async fn update(
        &self,
        id: i32,
        params: MatchSeriesParams,
    ) -> Result<Option<MatchSeries>, DbErr> {
        let Some(existing) = entity::prelude::MatchSeries::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::match_series::ActiveModel = existing.into();
        active.name = ActiveValue::Set(params.name);
        active.description = ActiveValue::Set(params.description);
        active.is_active = ActiveValue::Set(params.is_active);

        let entity = active.update(self.db).await?;

        Ok(Some(MatchSeries::from_entity(entity)))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::MatchSeries::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Links a match to a series. Linking an already linked match is a no-op.
    ///
    /// # Returns
    /// - `Ok(true)` - Link created
    /// - `Ok(false)` - Match was already in the series
    pub async fn add_match(&self, series_id: i32, match_id: i32) -> Result<bool, DbErr> {
        let existing = entity::prelude::MatchSeriesMatch::find_by_id((series_id, match_id))
            .one(self.db)
            .await?;

        if existing.is_some() {
            return Ok(false);
        }

        entity::match_series_match::ActiveModel {
            match_series_id: ActiveValue::Set(series_id),
            game_match_id: ActiveValue::Set(match_id),
        }
        .insert(self.db)
        .await?;

        Ok(true)
    }

    /// Unlinks a match from a series.
    ///
    /// # Returns
    /// - `Ok(true)` - Link removed
    /// - `Ok(false)` - Match was not in the series
    pub async fn remove_match(&self, series_id: i32, match_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::MatchSeriesMatch::delete_by_id((series_id, match_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// IDs of the matches linked to a series.
    pub async fn get_match_ids(&self, series_id: i32) -> Result<Vec<i32>, DbErr> {
        let links = entity::prelude::MatchSeriesMatch::find()
            .filter(entity::match_series_match::Column::MatchSeriesId.eq(series_id))
            .all(self.db)
            .await?;

        Ok(links.into_iter().map(|link| link.game_match_id).collect())
    }
}
