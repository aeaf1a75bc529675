use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{
    game_match::MatchDto,
    team::TeamDto,
};

// Missing fields deserialize to empty values so they are rejected with a
// readable 400 rather than an extractor rejection.

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct RegisterParticipantDto {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone_number: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct RegisterTeamDto {
    #[serde(default)]
    pub team_name: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub participants: Vec<RegisterParticipantDto>,
    #[serde(default)]
    pub tournament_id: Option<i32>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct TeamLoginDto {
    #[serde(default)]
    pub team_name: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct AdminLoginDto {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Token issued to a team after registering or logging in.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct TeamSessionDto {
    pub message: String,
    pub token: String,
    pub team: TeamDto,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct AccountDto {
    pub id: i32,
    pub username: String,
    pub is_staff: bool,
    pub is_superuser: bool,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct AdminSessionDto {
    pub message: String,
    pub token: String,
    pub user: AccountDto,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct MyTeamDto {
    pub team: TeamDto,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct LoadMatchDto {
    #[serde(default)]
    pub opponent_team_id: Option<i32>,
    #[serde(default)]
    pub user_goals: i32,
    #[serde(default)]
    pub opponent_goals: i32,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct MatchRecordedDto {
    pub message: String,
    #[serde(rename = "match")]
    pub game_match: MatchDto,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct AssignTournamentDto {
    #[serde(default)]
    pub tournament_id: Option<i32>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct TeamAssignedDto {
    pub message: String,
    pub team: TeamDto,
}
