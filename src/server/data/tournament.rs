//! Tournament data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::tournament::{Tournament, TournamentParams};

pub struct TournamentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TournamentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: TournamentParams) -> Result<Tournament, DbErr> {
        let entity = entity::tournament::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(params.name),
            start_date: ActiveValue::Set(params.start_date),
            estimated_end_date: ActiveValue::Set(params.estimated_end_date),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(Tournament::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Tournament>, DbErr> {
        let entity = entity::prelude::Tournament::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Tournament::from_entity))
    }

    /// The tournament used when registration does not name one: the earliest to start.
    pub async fn find_default(&self) -> Result<Option<Tournament>, DbErr> {
        let entity = entity::prelude::Tournament::find()
            .order_by_asc(entity::tournament::Column::StartDate)
            .order_by_asc(entity::tournament::Column::Id)
            .one(self.db)
            .await?;

        Ok(entity.map(Tournament::from_entity))
    }

    /// Checks whether another tournament already uses `name`.
    ///
    /// # Arguments
    /// - `name` - Name to look for
    /// - `exclude_id` - Tournament to ignore, used when renaming
    pub async fn name_taken(&self, name: &str, exclude_id: Option<i32>) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Tournament::find()
            .filter(entity::tournament::Column::Name.eq(name));

        if let Some(id) = exclude_id {
            query = query.filter(entity::tournament::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// All tournaments by start date.
    pub async fn get_all(&self) -> Result<Vec<Tournament>, DbErr> {
        let entities = entity::prelude::Tournament::find()
            .order_by_asc(entity::tournament::Column::StartDate)
            .order_by_asc(entity::tournament::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Tournament::from_entity).collect())
    }

    /// All tournaments, most recently created first.
    pub async fn get_all_newest_first(&self) -> Result<Vec<Tournament>, DbErr> {
        let entities = entity::prelude::Tournament::find()
            .order_by_desc(entity::tournament::Column::CreatedAt)
            .order_by_desc(entity::tournament::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Tournament::from_entity).collect())
    }

    /// Replaces a tournament's fields.
    ///
    /// # Returns
    /// - `Ok(Some(Tournament))` - Updated tournament
    /// - `Ok(None)` - No tournament with that ID
    pub async fn update(
        &self,
        id: i32,
        params: TournamentParams,
    ) -> Result<Option<Tournament>, DbErr> {
        let Some(existing) = entity::prelude::Tournament::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::tournament::ActiveModel = existing.into();
        active.name = ActiveValue::Set(params.name);
        active.start_date = ActiveValue::Set(params.start_date);
        active.estimated_end_date = ActiveValue::Set(params.estimated_end_date);

        let entity = active.update(self.db).await?;

        Ok(Some(Tournament::from_entity(entity)))
    }

    /// Deletes a tournament and, through cascading keys, its teams.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Tournament::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
