//! Participant factory for creating test participant entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test participants with customizable fields.
pub struct ParticipantFactory<'a> {
    db: &'a DatabaseConnection,
    team_id: i32,
    name: String,
    phone_number: Option<String>,
    is_active: bool,
}

impl<'a> ParticipantFactory<'a> {
    /// Creates a new ParticipantFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Participant {id}"`
    /// - phone_number: `None`
    /// - is_active: `true`
    pub fn new(db: &'a DatabaseConnection, team_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            team_id,
            name: format!("Participant {}", id),
            phone_number: None,
            is_active: true,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn phone_number(mut self, phone_number: Option<&str>) -> Self {
        self.phone_number = phone_number.map(str::to_string);
        self
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Builds and inserts the participant entity into the database.
    pub async fn build(self) -> Result<entity::participant::Model, DbErr> {
        entity::participant::ActiveModel {
            id: ActiveValue::NotSet,
            team_id: ActiveValue::Set(self.team_id),
            name: ActiveValue::Set(self.name),
            phone_number: ActiveValue::Set(self.phone_number),
            is_active: ActiveValue::Set(self.is_active),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active participant for the given team.
pub async fn create_participant(
    db: &DatabaseConnection,
    team_id: i32,
) -> Result<entity::participant::Model, DbErr> {
    ParticipantFactory::new(db, team_id).build().await
}
