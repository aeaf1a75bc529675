use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct TeamDto {
    pub id: i32,
    pub name: String,
    pub group: Option<String>,
    /// First phone number found among the team's participants.
    pub phone_number: Option<String>,
    pub tournament_id: i32,
    pub tournament_name: String,
    pub created_at: DateTime<Utc>,
}

/// Request body used both to create and to replace a team.
#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct TeamFormDto {
    pub name: String,
    pub tournament_id: i32,
    #[serde(default)]
    pub group: Option<String>,
}

#[derive(Deserialize, IntoParams)]
pub struct TeamFilterDto {
    pub group: Option<String>,
    pub tournament_id: Option<i32>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct OpponentDto {
    pub id: i32,
    pub name: String,
    pub group: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct OpponentListDto {
    pub teams: Vec<OpponentDto>,
}
