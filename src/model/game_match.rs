use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct MatchDto {
    pub id: i32,
    pub team1_id: i32,
    pub team1_name: String,
    pub team2_id: i32,
    pub team2_name: String,
    pub goals1: i32,
    pub goals2: i32,
    pub is_finished: bool,
    pub played_at: DateTime<Utc>,
    /// Name of the team with strictly more goals, `None` on a draw.
    pub winner_name: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct MatchListDto {
    pub matches: Vec<MatchDto>,
}

/// Request body used both to create and to replace a match.
#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct MatchFormDto {
    pub team1_id: i32,
    pub team2_id: i32,
    #[serde(default)]
    pub goals1: i32,
    #[serde(default)]
    pub goals2: i32,
    #[serde(default)]
    pub is_finished: bool,
    /// Defaults to the time of the request.
    #[serde(default)]
    pub played_at: Option<DateTime<Utc>>,
}
