//! Group assignment parameters and the random group draw.

use rand::seq::IndexedRandom;

use crate::{
    model::tournament::{AssignGroupsDto, RandomGroupsDto},
    server::{error::AppError, model::team::normalize_group},
};

/// Labels drawn from when a random assignment names none.
pub const DEFAULT_GROUPS: [&str; 3] = ["A", "B", "C"];

/// One explicit team to group assignment. A blank group clears the team's group.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupAssignment {
    pub team_id: i32,
    pub group: Option<String>,
}

impl GroupAssignment {
    /// Converts the request, rejecting an empty assignment list.
    pub fn from_dto(dto: AssignGroupsDto) -> Result<Vec<Self>, AppError> {
        if dto.assignments.is_empty() {
            return Err(AppError::BadRequest("No assignments provided".to_string()));
        }

        Ok(dto
            .assignments
            .into_iter()
            .map(|a| Self {
                team_id: a.team_id,
                group: normalize_group(Some(a.group)),
            })
            .collect())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RandomGroupsParams {
    /// Candidate labels, trimmed and deduplicated in request order.
    pub groups: Vec<String>,
    /// Re-draw teams that already have a group.
    pub overwrite: bool,
}

impl RandomGroupsParams {
    pub fn from_dto(dto: RandomGroupsDto) -> Result<Self, AppError> {
        let requested = dto
            .groups
            .unwrap_or_else(|| DEFAULT_GROUPS.iter().map(|g| g.to_string()).collect());

        let mut groups: Vec<String> = Vec::new();
        for group in requested.into_iter().filter_map(|g| normalize_group(Some(g))) {
            if !groups.contains(&group) {
                groups.push(group);
            }
        }

        if groups.is_empty() {
            return Err(AppError::BadRequest(
                "At least one group label is required".to_string(),
            ));
        }

        Ok(Self {
            groups,
            overwrite: dto.overwrite,
        })
    }
}

/// Draws one label per team, each independently and uniformly from `groups`.
///
/// Draws nothing when `groups` is empty.
pub fn draw_groups(count: usize, groups: &[String]) -> Vec<String> {
    let mut rng = rand::rng();

    (0..count)
        .filter_map(|_| groups.choose(&mut rng).cloned())
        .collect()
}
