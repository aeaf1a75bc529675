use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::team::TeamDto;

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct TournamentDto {
    pub id: i32,
    pub name: String,
    pub start_date: NaiveDate,
    pub estimated_end_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

/// Tournament listed to teams looking for a tournament to join.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct TournamentSummaryDto {
    pub id: i32,
    pub name: String,
    pub start_date: NaiveDate,
    pub estimated_end_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub teams_count: u64,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct TournamentListDto {
    pub tournaments: Vec<TournamentSummaryDto>,
}

/// Tournament overview for the admin panel.
///
/// `teams_by_group` maps each group label to the number of teams in it; teams
/// without a group are counted under `"No Group"`.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct AdminTournamentDto {
    pub id: i32,
    pub name: String,
    pub start_date: NaiveDate,
    pub estimated_end_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub teams_count: u64,
    pub teams_by_group: BTreeMap<String, u64>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct AdminTournamentListDto {
    pub tournaments: Vec<AdminTournamentDto>,
    pub total_tournaments: u64,
}

/// Request body used both to create and to replace a tournament.
#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct TournamentFormDto {
    pub name: String,
    pub start_date: NaiveDate,
    pub estimated_end_date: NaiveDate,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct TournamentCreatedDto {
    pub message: String,
    pub tournament: TournamentDto,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct TournamentTeamsDto {
    pub tournament: TournamentDto,
    pub teams_by_group: BTreeMap<String, Vec<TeamDto>>,
    pub teams_without_group: Vec<TeamDto>,
    pub total_teams: u64,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct GroupAssignmentDto {
    pub team_id: i32,
    pub group: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct AssignGroupsDto {
    #[serde(default)]
    pub assignments: Vec<GroupAssignmentDto>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct AssignGroupsResultDto {
    pub message: String,
    pub updated_teams: Vec<TeamDto>,
}

#[derive(Serialize, Deserialize, Default, ToSchema)]
pub struct RandomGroupsDto {
    /// Candidate labels, defaults to `["A", "B", "C"]`.
    #[serde(default)]
    pub groups: Option<Vec<String>>,
    /// Re-draw teams that already have a group.
    #[serde(default)]
    pub overwrite: bool,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct RandomGroupsResultDto {
    pub message: String,
    pub assigned_teams: Vec<TeamDto>,
    pub available_groups: Vec<String>,
}
