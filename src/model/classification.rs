use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct ClassificationDto {
    pub id: i32,
    pub team_id: i32,
    pub team_name: String,
    pub points: i32,
    pub games_played: i32,
    pub games_won: i32,
    pub games_lost: i32,
    pub goals_for: i32,
    pub goals_against: i32,
    pub goal_difference: i32,
    pub position: Option<i32>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct CreateClassificationDto {
    pub team_id: i32,
    #[serde(default)]
    pub position: Option<i32>,
}

/// Only the ranking position is editable, every counter is owned by the standings engine.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct UpdateClassificationDto {
    #[serde(default)]
    pub position: Option<i32>,
}

#[derive(Deserialize, IntoParams)]
pub struct ClassificationFilterDto {
    pub group: Option<String>,
    pub tournament_id: Option<i32>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct RankingResultDto {
    pub message: String,
    pub classifications: Vec<ClassificationDto>,
}
