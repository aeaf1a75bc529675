//! Classification (standings) data repository.
//!
//! A team's classification row is created lazily on its first result. Result updates are
//! written as column-relative increments so two results for the same team never overwrite
//! each other's counters, even when they are recorded concurrently.

use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::classification::{Classification, ClassificationDetail, ResultDelta};

pub struct ClassificationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ClassificationRepository<'a, C> {
    /// Creates a new ClassificationRepository instance.
    ///
    /// # Arguments
    /// - `db` - Connection or transaction to run queries on
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Classification>, DbErr> {
        let entity = entity::prelude::Classification::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Classification::from_entity))
    }

    pub async fn find_by_team(&self, team_id: i32) -> Result<Option<Classification>, DbErr> {
        let entity = entity::prelude::Classification::find()
            .filter(entity::classification::Column::TeamId.eq(team_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Classification::from_entity))
    }

    /// Inserts a classification with every counter at zero.
    ///
    /// # Arguments
    /// - `team_id` - Team the row belongs to
    /// - `position` - Initial table position, usually `None`
    ///
    /// # Returns
    /// - `Ok(Classification)` - The created row
    /// - `Err(DbErr)` - Database error, including a team that already has a row
    pub async fn create(
        &self,
        team_id: i32,
        position: Option<i32>,
    ) -> Result<Classification, DbErr> {
        let entity = entity::classification::ActiveModel {
            id: ActiveValue::NotSet,
            team_id: ActiveValue::Set(team_id),
            points: ActiveValue::Set(0),
            games_played: ActiveValue::Set(0),
            games_won: ActiveValue::Set(0),
            games_lost: ActiveValue::Set(0),
            goals_for: ActiveValue::Set(0),
            goals_against: ActiveValue::Set(0),
            position: ActiveValue::Set(position),
        }
        .insert(self.db)
        .await?;

        Ok(Classification::from_entity(entity))
    }

    /// Returns the team's classification, inserting an all-zero row when it has none.
    pub async fn ensure(&self, team_id: i32) -> Result<Classification, DbErr> {
        match self.find_by_team(team_id).await? {
            Some(classification) => Ok(classification),
            None => self.create(team_id, None).await,
        }
    }

    /// Adds a result delta to the team's classification.
    ///
    /// Every counter is written as `column = column + delta` rather than from a value read
    /// earlier, then the row is read back.
    ///
    /// # Returns
    /// - `Ok(Classification)` - The row after the increment
    /// - `Err(DbErr)` - Database error during insert, update or re-read
    pub async fn apply_delta(
        &self,
        team_id: i32,
        delta: &ResultDelta,
    ) -> Result<Classification, DbErr> {
        use entity::classification::Column;

        let row = self.ensure(team_id).await?;

        entity::prelude::Classification::update_many()
            .col_expr(Column::Points, Expr::col(Column::Points).add(delta.points))
            .col_expr(
                Column::GamesPlayed,
                Expr::col(Column::GamesPlayed).add(delta.games_played),
            )
            .col_expr(
                Column::GamesWon,
                Expr::col(Column::GamesWon).add(delta.games_won),
            )
            .col_expr(
                Column::GamesLost,
                Expr::col(Column::GamesLost).add(delta.games_lost),
            )
            .col_expr(
                Column::GoalsFor,
                Expr::col(Column::GoalsFor).add(delta.goals_for),
            )
            .col_expr(
                Column::GoalsAgainst,
                Expr::col(Column::GoalsAgainst).add(delta.goals_against),
            )
            .filter(Column::Id.eq(row.id))
            .exec(self.db)
            .await?;

        self.find_by_id(row.id).await?.ok_or_else(|| {
            DbErr::RecordNotFound(format!("classification {} after update", row.id))
        })
    }

    /// Sets or clears the table position of a classification.
    ///
    /// # Returns
    /// - `Ok(Some(Classification))` - Updated row
    /// - `Ok(None)` - No classification with that ID
    pub async fn set_position(
        &self,
        id: i32,
        position: Option<i32>,
    ) -> Result<Option<Classification>, DbErr> {
        let Some(existing) = entity::prelude::Classification::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::classification::ActiveModel = existing.into();
        active.position = ActiveValue::Set(position);

        let entity = active.update(self.db).await?;

        Ok(Some(Classification::from_entity(entity)))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Classification::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Standings table in table order, optionally limited to a group and/or tournament.
    ///
    /// Rows are ordered by points, then goals scored, both descending; ties keep
    /// insertion order.
    pub async fn get_table(
        &self,
        group: Option<&str>,
        tournament_id: Option<i32>,
    ) -> Result<Vec<ClassificationDetail>, DbErr> {
        let mut query = entity::prelude::Classification::find()
            .find_also_related(entity::prelude::Team);

        if let Some(group) = group {
            query = query.filter(entity::team::Column::Group.eq(group));
        }
        if let Some(tournament_id) = tournament_id {
            query = query.filter(entity::team::Column::TournamentId.eq(tournament_id));
        }

        let rows = query
            .order_by_desc(entity::classification::Column::Points)
            .order_by_desc(entity::classification::Column::GoalsFor)
            .order_by_asc(entity::classification::Column::Id)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(classification, team)| ClassificationDetail {
                classification: Classification::from_entity(classification),
                team_name: team.map(|t| t.name).unwrap_or_default(),
            })
            .collect())
    }

    /// Attaches the team name to a single classification.
    pub async fn with_detail(
        &self,
        classification: Classification,
    ) -> Result<ClassificationDetail, DbErr> {
        let team_name = entity::prelude::Team::find_by_id(classification.team_id)
            .one(self.db)
            .await?
            .map(|t| t.name)
            .unwrap_or_default();

        Ok(ClassificationDetail {
            classification,
            team_name,
        })
    }
}
