//! Match series domain models.

use chrono::{DateTime, Utc};

use crate::{
    model::match_series::{MatchSeriesDto, MatchSeriesFormDto},
    server::model::game_match::MatchDetail,
};

#[derive(Debug, Clone, PartialEq)]
pub struct MatchSeries {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl MatchSeries {
    pub fn from_entity(entity: entity::match_series::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            is_active: entity.is_active,
            created_at: entity.created_at,
        }
    }
}

/// Series together with its matches.
#[derive(Debug, Clone)]
pub struct MatchSeriesDetail {
    pub series: MatchSeries,
    pub matches: Vec<MatchDetail>,
}

impl MatchSeriesDetail {
    pub fn total_matches(&self) -> u64 {
        self.matches.len() as u64
    }

    pub fn finished_matches(&self) -> u64 {
        self.matches
            .iter()
            .filter(|m| m.game_match.is_finished)
            .count() as u64
    }

    pub fn into_dto(self) -> MatchSeriesDto {
        let total_matches = self.total_matches();
        let finished_matches = self.finished_matches();

        MatchSeriesDto {
            id: self.series.id,
            name: self.series.name,
            description: self.series.description,
            is_active: self.series.is_active,
            created_at: self.series.created_at,
            matches: self.matches.into_iter().map(MatchDetail::into_dto).collect(),
            total_matches,
            finished_matches,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchSeriesParams {
    pub name: String,
    pub description: String,
    pub is_active: bool,
}

impl MatchSeriesParams {
    pub fn from_dto(dto: MatchSeriesFormDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            description: dto.description,
            is_active: dto.is_active,
        }
    }
}
