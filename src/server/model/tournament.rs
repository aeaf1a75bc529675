//! Tournament domain models and parameters.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};

use crate::{
    model::tournament::{
        AdminTournamentDto, TournamentDto, TournamentFormDto, TournamentSummaryDto,
        TournamentTeamsDto,
    },
    server::model::team::TeamDetail,
};

/// Label under which teams without a group are counted.
pub const NO_GROUP_LABEL: &str = "No Group";

#[derive(Debug, Clone, PartialEq)]
pub struct Tournament {
    pub id: i32,
    pub name: String,
    pub start_date: NaiveDate,
    pub estimated_end_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl Tournament {
    pub fn into_dto(self) -> TournamentDto {
        TournamentDto {
            id: self.id,
            name: self.name,
            start_date: self.start_date,
            estimated_end_date: self.estimated_end_date,
            created_at: self.created_at,
        }
    }

    pub fn into_summary_dto(self, teams_count: u64) -> TournamentSummaryDto {
        TournamentSummaryDto {
            id: self.id,
            name: self.name,
            start_date: self.start_date,
            estimated_end_date: self.estimated_end_date,
            created_at: self.created_at,
            teams_count,
        }
    }

    pub fn from_entity(entity: entity::tournament::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            start_date: entity.start_date,
            estimated_end_date: entity.estimated_end_date,
            created_at: entity.created_at,
        }
    }
}

/// Tournament with team counts for the admin overview.
#[derive(Debug, Clone)]
pub struct TournamentOverview {
    pub tournament: Tournament,
    pub teams_count: u64,
    /// Teams per group label, ungrouped teams under `NO_GROUP_LABEL`.
    pub teams_by_group: BTreeMap<String, u64>,
}

impl TournamentOverview {
    pub fn into_dto(self) -> AdminTournamentDto {
        AdminTournamentDto {
            id: self.tournament.id,
            name: self.tournament.name,
            start_date: self.tournament.start_date,
            estimated_end_date: self.tournament.estimated_end_date,
            created_at: self.tournament.created_at,
            teams_count: self.teams_count,
            teams_by_group: self.teams_by_group,
        }
    }
}

/// Teams of one tournament split by group.
#[derive(Debug, Clone)]
pub struct TournamentTeams {
    pub tournament: Tournament,
    pub teams_by_group: BTreeMap<String, Vec<TeamDetail>>,
    pub teams_without_group: Vec<TeamDetail>,
}

impl TournamentTeams {
    /// Splits teams on their group label; blank labels count as no group.
    pub fn from_teams(tournament: Tournament, teams: Vec<TeamDetail>) -> Self {
        let mut teams_by_group: BTreeMap<String, Vec<TeamDetail>> = BTreeMap::new();
        let mut teams_without_group = Vec::new();

        for detail in teams {
            match detail.team.group_label() {
                Some(label) => teams_by_group
                    .entry(label.to_string())
                    .or_default()
                    .push(detail),
                None => teams_without_group.push(detail),
            }
        }

        Self {
            tournament,
            teams_by_group,
            teams_without_group,
        }
    }

    pub fn total_teams(&self) -> u64 {
        let grouped: usize = self.teams_by_group.values().map(Vec::len).sum();
        (grouped + self.teams_without_group.len()) as u64
    }

    pub fn into_dto(self) -> TournamentTeamsDto {
        let total_teams = self.total_teams();

        TournamentTeamsDto {
            tournament: self.tournament.into_dto(),
            teams_by_group: self
                .teams_by_group
                .into_iter()
                .map(|(group, teams)| (group, teams.into_iter().map(TeamDetail::into_dto).collect()))
                .collect(),
            teams_without_group: self
                .teams_without_group
                .into_iter()
                .map(TeamDetail::into_dto)
                .collect(),
            total_teams,
        }
    }
}

/// Parameters for creating or replacing a tournament.
#[derive(Debug, Clone)]
pub struct TournamentParams {
    pub name: String,
    pub start_date: NaiveDate,
    pub estimated_end_date: NaiveDate,
}

impl TournamentParams {
    pub fn from_dto(dto: TournamentFormDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            start_date: dto.start_date,
            estimated_end_date: dto.estimated_end_date,
        }
    }
}
