//! Match domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::game_match::{MatchDto, MatchFormDto};

#[derive(Debug, Clone, PartialEq)]
pub struct GameMatch {
    pub id: i32,
    pub team1_id: i32,
    pub team2_id: i32,
    pub goals1: i32,
    pub goals2: i32,
    pub is_finished: bool,
    pub played_at: DateTime<Utc>,
}

impl GameMatch {
    /// Team with strictly more goals, `None` on a draw.
    pub fn winner_id(&self) -> Option<i32> {
        match self.goals1.cmp(&self.goals2) {
            std::cmp::Ordering::Greater => Some(self.team1_id),
            std::cmp::Ordering::Less => Some(self.team2_id),
            std::cmp::Ordering::Equal => None,
        }
    }

    pub fn from_entity(entity: entity::game_match::Model) -> Self {
        Self {
            id: entity.id,
            team1_id: entity.team1_id,
            team2_id: entity.team2_id,
            goals1: entity.goals1,
            goals2: entity.goals2,
            is_finished: entity.is_finished,
            played_at: entity.played_at,
        }
    }
}

/// Match with both team names resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchDetail {
    pub game_match: GameMatch,
    pub team1_name: String,
    pub team2_name: String,
}

impl MatchDetail {
    pub fn into_dto(self) -> MatchDto {
        let winner_name = match self.game_match.winner_id() {
            Some(id) if id == self.game_match.team1_id => Some(self.team1_name.clone()),
            Some(_) => Some(self.team2_name.clone()),
            None => None,
        };

        MatchDto {
            id: self.game_match.id,
            team1_id: self.game_match.team1_id,
            team1_name: self.team1_name,
            team2_id: self.game_match.team2_id,
            team2_name: self.team2_name,
            goals1: self.game_match.goals1,
            goals2: self.game_match.goals2,
            is_finished: self.game_match.is_finished,
            played_at: self.game_match.played_at,
            winner_name,
        }
    }
}

/// Parameters for inserting or replacing a match.
#[derive(Debug, Clone)]
pub struct MatchParams {
    pub team1_id: i32,
    pub team2_id: i32,
    pub goals1: i32,
    pub goals2: i32,
    pub is_finished: bool,
    pub played_at: DateTime<Utc>,
}

impl MatchParams {
    pub fn from_dto(dto: MatchFormDto) -> Self {
        Self {
            team1_id: dto.team1_id,
            team2_id: dto.team2_id,
            goals1: dto.goals1,
            goals2: dto.goals2,
            is_finished: dto.is_finished,
            played_at: dto.played_at.unwrap_or_else(Utc::now),
        }
    }

    /// A finished result reported by a team, with the reporting team as side one.
    pub fn finished(team1_id: i32, team2_id: i32, goals1: i32, goals2: i32) -> Self {
        Self {
            team1_id,
            team2_id,
            goals1,
            goals2,
            is_finished: true,
            played_at: Utc::now(),
        }
    }
}
