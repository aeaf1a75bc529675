//! Match data repository.

use std::collections::{HashMap, HashSet};

use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::game_match::{GameMatch, MatchDetail, MatchParams};

pub struct GameMatchRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> GameMatchRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a match. Standings are not touched here.
    pub async fn create(&self, params: MatchParams) -> Result<GameMatch, DbErr> {
        let entity = entity::game_match::ActiveModel {
            id: ActiveValue::NotSet,
            team1_id: ActiveValue::Set(params.team1_id),
            team2_id: ActiveValue::Set(params.team2_id),
            goals1: ActiveValue::Set(params.goals1),
            goals2: ActiveValue::Set(params.goals2),
            is_finished: ActiveValue::Set(params.is_finished),
            played_at: ActiveValue::Set(params.played_at),
        }
        .insert(self.db)
        .await?;

        Ok(GameMatch::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<GameMatch>, DbErr> {
        let entity = entity::prelude::GameMatch::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(GameMatch::from_entity))
    }

    /// All matches, latest first.
    pub async fn get_all(&self) -> Result<Vec<GameMatch>, DbErr> {
        let entities = entity::prelude::GameMatch::find()
            .order_by_desc(entity::game_match::Column::PlayedAt)
            .order_by_desc(entity::game_match::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(GameMatch::from_entity).collect())
    }

    /// The `limit` most recently played matches.
    pub async fn get_recent(&self, limit: u64) -> Result<Vec<GameMatch>, DbErr> {
        let entities = entity::prelude::GameMatch::find()
            .order_by_desc(entity::game_match::Column::PlayedAt)
            .order_by_desc(entity::game_match::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(GameMatch::from_entity).collect())
    }

    pub async fn get_finished(&self) -> Result<Vec<GameMatch>, DbErr> {
        let entities = entity::prelude::GameMatch::find()
            .filter(entity::game_match::Column::IsFinished.eq(true))
            .order_by_desc(entity::game_match::Column::PlayedAt)
            .order_by_desc(entity::game_match::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(GameMatch::from_entity).collect())
    }

    /// Matches in which the team played on either side, latest first.
    pub async fn get_for_team(&self, team_id: i32) -> Result<Vec<GameMatch>, DbErr> {
        let entities = entity::prelude::GameMatch::find()
            .filter(
                Condition::any()
                    .add(entity::game_match::Column::Team1Id.eq(team_id))
                    .add(entity::game_match::Column::Team2Id.eq(team_id)),
            )
            .order_by_desc(entity::game_match::Column::PlayedAt)
            .order_by_desc(entity::game_match::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(GameMatch::from_entity).collect())
    }

    /// Matches by ID, latest first. Unknown IDs are skipped.
    pub async fn get_by_ids(&self, ids: Vec<i32>) -> Result<Vec<GameMatch>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::GameMatch::find()
            .filter(entity::game_match::Column::Id.is_in(ids))
            .order_by_desc(entity::game_match::Column::PlayedAt)
            .order_by_desc(entity::game_match::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(GameMatch::from_entity).collect())
    }

    /// Replaces every field of a match.
    ///
    /// # Returns
    /// - `Ok(Some(GameMatch))` - Updated match
    /// - `Ok(None)` - No match with that ID
    pub async fn update(&self, id: i32, params: MatchParams) -> Result<Option<GameMatch>, DbErr> {
        let Some(existing) = entity::prelude::GameMatch::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::game_match::ActiveModel = existing.into();
        active.team1_id = ActiveValue::Set(params.team1_id);
        active.team2_id = ActiveValue::Set(params.team2_id);
        active.goals1 = ActiveValue::Set(params.goals1);
        active.goals2 = ActiveValue::Set(params.goals2);
        active.is_finished = ActiveValue::Set(params.is_finished);
        active.played_at = ActiveValue::Set(params.played_at);

        let entity = active.update(self.db).await?;

        Ok(Some(GameMatch::from_entity(entity)))
    }

    /// Replaces every field of a match that is not yet finished.
    ///
    /// The finished check and the write are a single statement, so of two concurrent
    /// writers finishing the same match only one sees a row change.
    ///
    /// # Returns
    /// - `Ok(true)` - The match was unfinished and has been updated
    /// - `Ok(false)` - No match with that ID, or it is already finished
    pub async fn update_if_unfinished(&self, id: i32, params: MatchParams) -> Result<bool, DbErr> {
        use entity::game_match::Column;

        let result = entity::prelude::GameMatch::update_many()
            .col_expr(Column::Team1Id, Expr::value(params.team1_id))
            .col_expr(Column::Team2Id, Expr::value(params.team2_id))
            .col_expr(Column::Goals1, Expr::value(params.goals1))
            .col_expr(Column::Goals2, Expr::value(params.goals2))
            .col_expr(Column::IsFinished, Expr::value(params.is_finished))
            .col_expr(Column::PlayedAt, Expr::value(params.played_at))
            .filter(Column::Id.eq(id))
            .filter(Column::IsFinished.eq(false))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::GameMatch::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Attaches both team names to a batch of matches with a single team query.
    pub async fn with_details(&self, matches: Vec<GameMatch>) -> Result<Vec<MatchDetail>, DbErr> {
        let team_ids: HashSet<i32> = matches
            .iter()
            .flat_map(|m| [m.team1_id, m.team2_id])
            .collect();

        let team_names: HashMap<i32, String> = if team_ids.is_empty() {
            HashMap::new()
        } else {
            entity::prelude::Team::find()
                .filter(entity::team::Column::Id.is_in(team_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|t| (t.id, t.name))
                .collect()
        };

        let name_of = |id: i32| team_names.get(&id).cloned().unwrap_or_default();

        Ok(matches
            .into_iter()
            .map(|game_match| MatchDetail {
                team1_name: name_of(game_match.team1_id),
                team2_name: name_of(game_match.team2_id),
                game_match,
            })
            .collect())
    }
}
