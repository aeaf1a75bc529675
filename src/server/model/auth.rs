//! Registration and login parameters, and the sessions they produce.

use crate::{
    model::auth::{AdminSessionDto, LoadMatchDto, RegisterTeamDto, TeamSessionDto},
    server::{
        error::AppError,
        model::{account::Account, team::TeamDetail},
    },
};

/// Number of participants every team registers with.
pub const PARTICIPANTS_PER_TEAM: usize = 2;

#[derive(Debug, Clone)]
pub struct ParticipantInput {
    pub name: String,
    pub phone_number: Option<String>,
}

/// Validated input for registering a team together with its account and participants.
#[derive(Debug, Clone)]
pub struct RegisterTeamParams {
    pub team_name: String,
    pub password: String,
    pub participants: Vec<ParticipantInput>,
    pub tournament_id: Option<i32>,
}

impl RegisterTeamParams {
    /// Builds the parameters, rejecting anything that must not reach the database.
    ///
    /// # Returns
    /// - `Ok(RegisterTeamParams)` - Input is complete
    /// - `Err(AppError::BadRequest)` - Missing team name or password, wrong participant
    ///   count, or a participant without a name
    pub fn from_dto(dto: RegisterTeamDto) -> Result<Self, AppError> {
        let team_name = dto.team_name.trim().to_string();

        if team_name.is_empty() || dto.password.is_empty() {
            return Err(AppError::BadRequest(
                "Team name and password are required".to_string(),
            ));
        }

        if dto.participants.len() != PARTICIPANTS_PER_TEAM {
            return Err(AppError::BadRequest(format!(
                "Exactly {} participants are required",
                PARTICIPANTS_PER_TEAM
            )));
        }

        let participants = dto
            .participants
            .into_iter()
            .map(|p| {
                let name = p.name.trim().to_string();
                if name.is_empty() {
                    return Err(AppError::BadRequest(
                        "Every participant needs a name".to_string(),
                    ));
                }
                Ok(ParticipantInput {
                    name,
                    phone_number: p.phone_number.filter(|phone| !phone.trim().is_empty()),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            team_name,
            password: dto.password,
            participants,
            tournament_id: dto.tournament_id,
        })
    }

    /// Account username derived from the team name: lowercased, spaces as underscores.
    pub fn base_username(&self) -> String {
        self.team_name.to_lowercase().replace(' ', "_")
    }
}

/// A result reported by a team against one of its opponents.
#[derive(Debug, Clone, Copy)]
pub struct LoadMatchParams {
    pub opponent_team_id: i32,
    pub user_goals: i32,
    pub opponent_goals: i32,
}

impl LoadMatchParams {
    pub fn from_dto(dto: LoadMatchDto) -> Result<Self, AppError> {
        let opponent_team_id = dto.opponent_team_id.ok_or_else(|| {
            AppError::BadRequest("Opponent team ID is required".to_string())
        })?;

        Ok(Self {
            opponent_team_id,
            user_goals: dto.user_goals,
            opponent_goals: dto.opponent_goals,
        })
    }
}

/// Token issued to a team account together with its team.
#[derive(Debug, Clone)]
pub struct TeamSession {
    pub token: String,
    pub team: TeamDetail,
}

impl TeamSession {
    pub fn into_dto(self, message: &str) -> TeamSessionDto {
        TeamSessionDto {
            message: message.to_string(),
            token: self.token,
            team: self.team.into_dto(),
        }
    }
}

/// Token issued to a staff or superuser account.
#[derive(Debug, Clone)]
pub struct AdminSession {
    pub token: String,
    pub account: Account,
}

impl AdminSession {
    pub fn into_dto(self, message: &str) -> AdminSessionDto {
        AdminSessionDto {
            message: message.to_string(),
            token: self.token,
            user: self.account.into_dto(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::auth::RegisterParticipantDto;

    fn participant(name: &str) -> RegisterParticipantDto {
        RegisterParticipantDto {
            name: name.to_string(),
            phone_number: None,
        }
    }

    fn register_dto(participants: Vec<RegisterParticipantDto>) -> RegisterTeamDto {
        RegisterTeamDto {
            team_name: "Los Pumas".to_string(),
            password: "secret".to_string(),
            participants,
            tournament_id: None,
        }
    }

    #[test]
    fn rejects_wrong_participant_count() {
        let one = RegisterTeamParams::from_dto(register_dto(vec![participant("Ana")]));
        let three = RegisterTeamParams::from_dto(register_dto(vec![
            participant("Ana"),
            participant("Beto"),
            participant("Caro"),
        ]));

        assert!(matches!(one, Err(AppError::BadRequest(_))));
        assert!(matches!(three, Err(AppError::BadRequest(_))));
    }

    #[test]
    fn rejects_blank_participant_name() {
        let result =
            RegisterTeamParams::from_dto(register_dto(vec![participant("Ana"), participant(" ")]));

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[test]
    fn rejects_missing_password() {
        let mut dto = register_dto(vec![participant("Ana"), participant("Beto")]);
        dto.password = String::new();

        assert!(matches!(
            RegisterTeamParams::from_dto(dto),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn derives_username_from_team_name() {
        let params =
            RegisterTeamParams::from_dto(register_dto(vec![participant("Ana"), participant("Beto")]))
                .unwrap();

        assert_eq!(params.base_username(), "los_pumas");
    }

    #[test]
    fn load_match_requires_opponent() {
        let result = LoadMatchParams::from_dto(LoadMatchDto {
            opponent_team_id: None,
            user_goals: 1,
            opponent_goals: 0,
        });

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }
}
