//! Participant domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::participant::{ParticipantDto, ParticipantFormDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Participant {
    pub id: i32,
    pub team_id: i32,
    pub name: String,
    pub phone_number: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl Participant {
    pub fn from_entity(entity: entity::participant::Model) -> Self {
        Self {
            id: entity.id,
            team_id: entity.team_id,
            name: entity.name,
            phone_number: entity.phone_number,
            is_active: entity.is_active,
            created_at: entity.created_at,
        }
    }
}

/// Participant with the name of its team.
#[derive(Debug, Clone)]
pub struct ParticipantDetail {
    pub participant: Participant,
    pub team_name: String,
}

impl ParticipantDetail {
    pub fn into_dto(self) -> ParticipantDto {
        ParticipantDto {
            id: self.participant.id,
            name: self.participant.name,
            team_id: self.participant.team_id,
            team_name: self.team_name,
            phone_number: self.participant.phone_number,
            is_active: self.participant.is_active,
            created_at: self.participant.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ParticipantParams {
    pub team_id: i32,
    pub name: String,
    pub phone_number: Option<String>,
    pub is_active: bool,
}

impl ParticipantParams {
    pub fn from_dto(dto: ParticipantFormDto) -> Self {
        Self {
            team_id: dto.team_id,
            name: dto.name.trim().to_string(),
            phone_number: dto.phone_number,
            is_active: dto.is_active,
        }
    }
}
