//! Standings rows and the arithmetic that updates them.
//!
//! A finished match is applied to each side separately: `ResultDelta::from_score`
//! turns one side's goals into counter increments, and the repository persists the
//! delta with column-relative updates.

use std::cmp::Ordering;

use crate::model::classification::ClassificationDto;

/// Points for a win.
pub const WIN_POINTS: i32 = 3;
/// Points for a draw. Draws have no counter of their own.
pub const DRAW_POINTS: i32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Loss,
    Draw,
}

impl Outcome {
    pub fn from_score(goals_for: i32, goals_against: i32) -> Self {
        match goals_for.cmp(&goals_against) {
            Ordering::Greater => Outcome::Win,
            Ordering::Less => Outcome::Loss,
            Ordering::Equal => Outcome::Draw,
        }
    }
}

/// Counter increments produced by one side of one finished match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResultDelta {
    pub points: i32,
    pub games_played: i32,
    pub games_won: i32,
    pub games_lost: i32,
    pub goals_for: i32,
    pub goals_against: i32,
}

impl ResultDelta {
    /// Delta for a team that scored `goals_for` and conceded `goals_against`.
    ///
    /// Callers reject negative goals before getting here.
    pub fn from_score(goals_for: i32, goals_against: i32) -> Self {
        let base = Self {
            games_played: 1,
            goals_for,
            goals_against,
            ..Default::default()
        };

        match Outcome::from_score(goals_for, goals_against) {
            Outcome::Win => Self {
                points: WIN_POINTS,
                games_won: 1,
                ..base
            },
            Outcome::Loss => Self {
                games_lost: 1,
                ..base
            },
            Outcome::Draw => Self {
                points: DRAW_POINTS,
                ..base
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub id: i32,
    pub team_id: i32,
    pub points: i32,
    pub games_played: i32,
    pub games_won: i32,
    pub games_lost: i32,
    pub goals_for: i32,
    pub goals_against: i32,
    /// Rank written by the ranking pass, never derived on read.
    pub position: Option<i32>,
}

impl Classification {
    pub fn goal_difference(&self) -> i32 {
        self.goals_for - self.goals_against
    }

    /// Draws are implied by the counters rather than stored.
    pub fn games_drawn(&self) -> i32 {
        self.games_played - self.games_won - self.games_lost
    }

    /// Table order: points descending, then goals scored descending.
    pub fn table_order(a: &Self, b: &Self) -> Ordering {
        b.points
            .cmp(&a.points)
            .then_with(|| b.goals_for.cmp(&a.goals_for))
    }

    pub fn from_entity(entity: entity::classification::Model) -> Self {
        Self {
            id: entity.id,
            team_id: entity.team_id,
            points: entity.points,
            games_played: entity.games_played,
            games_won: entity.games_won,
            games_lost: entity.games_lost,
            goals_for: entity.goals_for,
            goals_against: entity.goals_against,
            position: entity.position,
        }
    }
}

/// Standings row with the name of its team.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassificationDetail {
    pub classification: Classification,
    pub team_name: String,
}

impl ClassificationDetail {
    pub fn into_dto(self) -> ClassificationDto {
        let goal_difference = self.classification.goal_difference();

        ClassificationDto {
            id: self.classification.id,
            team_id: self.classification.team_id,
            team_name: self.team_name,
            points: self.classification.points,
            games_played: self.classification.games_played,
            games_won: self.classification.games_won,
            games_lost: self.classification.games_lost,
            goals_for: self.classification.goals_for,
            goals_against: self.classification.goals_against,
            goal_difference,
            position: self.classification.position,
        }
    }
}
