//! Participant data repository.

use std::collections::{HashMap, HashSet};

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::participant::{Participant, ParticipantDetail, ParticipantParams};

pub struct ParticipantRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ParticipantRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: ParticipantParams) -> Result<Participant, DbErr> {
        let entity = entity::participant::ActiveModel {
            id: ActiveValue::NotSet,
            team_id: ActiveValue::Set(params.team_id),
            name: ActiveValue::Set(params.name),
            phone_number: ActiveValue::Set(params.phone_number),
            is_active: ActiveValue::Set(params.is_active),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(Participant::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Participant>, DbErr> {
        let entity = entity::prelude::Participant::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Participant::from_entity))
    }

    /// Lists participants by name.
    ///
    /// # Arguments
    /// - `active_only` - Skip participants whose active flag is cleared
    pub async fn get_all(&self, active_only: bool) -> Result<Vec<Participant>, DbErr> {
        let mut query = entity::prelude::Participant::find();

        if active_only {
            query = query.filter(entity::participant::Column::IsActive.eq(true));
        }

        let entities = query
            .order_by_asc(entity::participant::Column::Name)
            .order_by_asc(entity::participant::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Participant::from_entity).collect())
    }

    pub async fn update(
        &self,
        id: i32,
        params: ParticipantParams,
    ) -> Result<Option<Participant>, DbErr> {
        let Some(existing) = entity::prelude::Participant::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::participant::ActiveModel = existing.into();
        active.team_id = ActiveValue::Set(params.team_id);
        active.name = ActiveValue::Set(params.name);
        active.phone_number = ActiveValue::Set(params.phone_number);
        active.is_active = ActiveValue::Set(params.is_active);

        let entity = active.update(self.db).await?;

        Ok(Some(Participant::from_entity(entity)))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Participant::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Attaches team names to a batch of participants.
    pub async fn with_details(
        &self,
        participants: Vec<Participant>,
    ) -> Result<Vec<ParticipantDetail>, DbErr> {
        let team_ids: HashSet<i32> = participants.iter().map(|p| p.team_id).collect();

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

        Ok(participants
            .into_iter()
            .map(|participant| ParticipantDetail {
                team_name: team_names
                    .get(&participant.team_id)
                    .cloned()
                    .unwrap_or_default(),
                participant,
            })
            .collect())
    }
}
