use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::game_match::MatchDto;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct MatchSeriesDto {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub matches: Vec<MatchDto>,
    pub total_matches: u64,
    pub finished_matches: u64,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct MatchSeriesFormDto {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct SeriesMatchDto {
    #[serde(default)]
    pub match_id: Option<i32>,
}

#[derive(Deserialize, IntoParams)]
pub struct MatchSeriesFilterDto {
    pub active: Option<bool>,
}
