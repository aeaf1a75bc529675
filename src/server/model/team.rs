//! Team domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::team::{OpponentDto, TeamDto, TeamFormDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Team {
    pub id: i32,
    /// Account the team logs in with, absent for teams created by an admin.
    pub account_id: Option<i32>,
    pub tournament_id: i32,
    pub name: String,
    pub group: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Team {
    /// Group label if the team has a non-blank one.
    pub fn group_label(&self) -> Option<&str> {
        self.group
            .as_deref()
            .map(str::trim)
            .filter(|group| !group.is_empty())
    }

    pub fn into_opponent_dto(self) -> OpponentDto {
        OpponentDto {
            id: self.id,
            name: self.name,
            group: self.group,
        }
    }

    pub fn from_entity(entity: entity::team::Model) -> Self {
        Self {
            id: entity.id,
            account_id: entity.account_id,
            tournament_id: entity.tournament_id,
            name: entity.name,
            group: entity.group,
            created_at: entity.created_at,
        }
    }
}

/// Team enriched with the data its API representation needs.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamDetail {
    pub team: Team,
    pub tournament_name: String,
    /// First phone number among the team's participants.
    pub phone_number: Option<String>,
}

impl TeamDetail {
    pub fn into_dto(self) -> TeamDto {
        TeamDto {
            id: self.team.id,
            name: self.team.name,
            group: self.team.group,
            phone_number: self.phone_number,
            tournament_id: self.team.tournament_id,
            tournament_name: self.tournament_name,
            created_at: self.team.created_at,
        }
    }
}

/// Parameters for inserting a team.
#[derive(Debug, Clone)]
pub struct CreateTeamParams {
    pub account_id: Option<i32>,
    pub tournament_id: i32,
    pub name: String,
    pub group: Option<String>,
}

impl CreateTeamParams {
    pub fn from_dto(dto: TeamFormDto) -> Self {
        Self {
            account_id: None,
            tournament_id: dto.tournament_id,
            name: dto.name.trim().to_string(),
            group: normalize_group(dto.group),
        }
    }
}

/// Parameters for replacing a team's editable fields.
#[derive(Debug, Clone)]
pub struct UpdateTeamParams {
    pub id: i32,
    pub tournament_id: i32,
    pub name: String,
    pub group: Option<String>,
}

impl UpdateTeamParams {
    pub fn from_dto(id: i32, dto: TeamFormDto) -> Self {
        Self {
            id,
            tournament_id: dto.tournament_id,
            name: dto.name.trim().to_string(),
            group: normalize_group(dto.group),
        }
    }
}

/// Blank group labels are stored as no group at all.
pub fn normalize_group(group: Option<String>) -> Option<String> {
    group
        .map(|g| g.trim().to_string())
        .filter(|g| !g.is_empty())
}
