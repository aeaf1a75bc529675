//! Team registration, logins and token sessions.

use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, TransactionTrait};

use crate::server::{
    data::{
        account::AccountRepository, auth_token::AuthTokenRepository,
        classification::ClassificationRepository, participant::ParticipantRepository,
        team::TeamRepository, tournament::TournamentRepository,
    },
    error::{auth::AuthError, AppError},
    model::{
        account::{Account, CreateAccountParams},
        auth::{AdminSession, RegisterTeamParams, TeamSession},
        participant::ParticipantParams,
        team::{CreateTeamParams, Team, TeamDetail},
        tournament::Tournament,
    },
    service::team::{TeamService, DUPLICATE_TEAM_NAME},
    util::password::{hash_password, verify_password},
};

/// Service for account credentials and the tokens issued for them.
///
/// Every account holds at most one token. Logging in returns the existing token if there
/// is one, logging out deletes it.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    /// Creates a new AuthService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a team together with its account, participants and token.
    ///
    /// Everything is written in one transaction. The account username is the team name
    /// in lowercase with spaces replaced by underscores; if that is taken, the current
    /// number of teams is appended.
    ///
    /// # Arguments
    /// - `params` - Validated registration input
    ///
    /// # Returns
    /// - `Ok(TeamSession)` - Token and the created team
    /// - `Err(AppError::NotFound)` - The requested tournament does not exist
    /// - `Err(AppError::BadRequest)` - No tournament requested and none exists
    /// - `Err(AppError::Conflict)` - Team name already used in the tournament
    pub async fn register(&self, params: RegisterTeamParams) -> Result<TeamSession, AppError> {
        let tournament = self.registration_tournament(params.tournament_id).await?;

        let password_hash = hash_password(&params.password)?;
        let base_username = params.base_username();

        let txn = self.db.begin().await?;

        if TeamRepository::new(&txn)
            .name_taken(&params.team_name, tournament.id, None)
            .await?
        {
            return Err(AppError::Conflict(DUPLICATE_TEAM_NAME.to_string()));
        }

        let username = unique_username(&txn, base_username).await?;
        let account = AccountRepository::new(&txn)
            .create(CreateAccountParams {
                username,
                password_hash,
                is_staff: false,
                is_superuser: false,
            })
            .await?;

        let team = TeamRepository::new(&txn)
            .create(CreateTeamParams {
                account_id: Some(account.id),
                tournament_id: tournament.id,
                name: params.team_name,
                group: None,
            })
            .await
            .map_err(|e| AppError::conflict_on_duplicate(e, DUPLICATE_TEAM_NAME))?;

        let participant_repo = ParticipantRepository::new(&txn);
        for participant in params.participants {
            participant_repo
                .create(ParticipantParams {
                    team_id: team.id,
                    name: participant.name,
                    phone_number: participant.phone_number,
                    is_active: true,
                })
                .await?;
        }

        let token = AuthTokenRepository::new(&txn)
            .get_or_create(account.id)
            .await?;

        txn.commit().await?;

        tracing::info!(
            team_id = team.id,
            tournament_id = tournament.id,
            username = %account.username,
            "Registered team"
        );

        let team = TeamService::new(self.db).detail(team).await?;

        Ok(TeamSession { token, team })
    }

    /// Logs a team in by team name and password.
    ///
    /// Team names are only unique per tournament, so every team with the name is tried
    /// and the first whose account password matches wins.
    ///
    /// # Returns
    /// - `Ok(TeamSession)` - Credentials matched
    /// - `Err(AppError::BadRequest)` - Name or password missing
    /// - `Err(AuthError::InvalidCredentials)` - No team with that name and password
    pub async fn login_team(
        &self,
        team_name: &str,
        password: &str,
    ) -> Result<TeamSession, AppError> {
        let team_name = team_name.trim();
        if team_name.is_empty() || password.is_empty() {
            return Err(AppError::BadRequest(
                "Team name and password are required".to_string(),
            ));
        }

        let accounts = AccountRepository::new(self.db);

        for team in TeamRepository::new(self.db).find_by_name(team_name).await? {
            let Some(account_id) = team.account_id else {
                continue;
            };
            let Some(account) = accounts.find_by_id(account_id).await? else {
                continue;
            };

            if verify_password(password, &account.password_hash)? {
                let token = AuthTokenRepository::new(self.db)
                    .get_or_create(account.id)
                    .await?;
                let team = TeamService::new(self.db).detail(team).await?;

                return Ok(TeamSession { token, team });
            }
        }

        Err(AuthError::InvalidCredentials(team_name.to_string()).into())
    }

    /// Logs a staff or superuser account in.
    ///
    /// # Returns
    /// - `Ok(AdminSession)` - Credentials matched an admin account
    /// - `Err(AuthError::InvalidCredentials)` - Unknown username or wrong password
    /// - `Err(AuthError::AccessDenied)` - Credentials are right but the account is not an admin
    pub async fn login_admin(
        &self,
        username: &str,
        password: &str,
    ) -> Result<AdminSession, AppError> {
        let username = username.trim();
        if username.is_empty() || password.is_empty() {
            return Err(AppError::BadRequest(
                "Username and password are required".to_string(),
            ));
        }

        let Some(account) = AccountRepository::new(self.db)
            .find_by_username(username)
            .await?
        else {
            return Err(AuthError::InvalidCredentials(username.to_string()).into());
        };

        if !verify_password(password, &account.password_hash)? {
            return Err(AuthError::InvalidCredentials(username.to_string()).into());
        }

        if !account.is_admin() {
            return Err(AuthError::AccessDenied(
                account.id,
                "Account attempted admin login without staff permissions".to_string(),
            )
            .into());
        }

        let token = AuthTokenRepository::new(self.db)
            .get_or_create(account.id)
            .await?;

        Ok(AdminSession { token, account })
    }

    /// Deletes the account's token. Logging out twice is not an error.
    pub async fn logout(&self, account_id: i32) -> Result<(), AppError> {
        AuthTokenRepository::new(self.db)
            .delete_by_account(account_id)
            .await?;

        Ok(())
    }

    /// Moves a team into another tournament.
    ///
    /// The team keeps its group label and standings; its classification is created if it
    /// does not exist yet.
    ///
    /// # Returns
    /// - `Ok(TeamDetail)` - The moved team
    /// - `Err(AppError::BadRequest)` - No tournament given
    /// - `Err(AppError::NotFound)` - Tournament does not exist
    /// - `Err(AppError::Conflict)` - Target tournament already has a team with this name
    pub async fn assign_tournament(
        &self,
        team: Team,
        tournament_id: Option<i32>,
    ) -> Result<TeamDetail, AppError> {
        let tournament_id = tournament_id
            .ok_or_else(|| AppError::BadRequest("Tournament ID is required".to_string()))?;

        let tournament = TournamentRepository::new(self.db)
            .find_by_id(tournament_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Tournament not found".to_string()))?;

        let txn = self.db.begin().await?;
        let team_repo = TeamRepository::new(&txn);

        if team_repo
            .name_taken(&team.name, tournament.id, Some(team.id))
            .await?
        {
            return Err(AppError::Conflict(DUPLICATE_TEAM_NAME.to_string()));
        }

        let moved = team_repo
            .set_tournament(team.id, tournament.id)
            .await
            .map_err(|e| AppError::conflict_on_duplicate(e, DUPLICATE_TEAM_NAME))?
            .ok_or_else(|| AppError::NotFound("Team not found".to_string()))?;
        ClassificationRepository::new(&txn).ensure(moved.id).await?;

        txn.commit().await?;

        tracing::info!(
            team_id = moved.id,
            tournament_id = tournament.id,
            "Team moved to tournament"
        );

        TeamService::new(self.db).detail(moved).await
    }

    /// Creates the configured superuser when no superuser exists yet.
    ///
    /// # Arguments
    /// - `username` - Configured superuser username, if any
    /// - `password` - Configured superuser password, if any
    ///
    /// # Returns
    /// - `Ok(Some(Account))` - A superuser was created
    /// - `Ok(None)` - A superuser already exists or none could be created
    pub async fn ensure_superuser(
        &self,
        username: Option<&str>,
        password: Option<&str>,
    ) -> Result<Option<Account>, AppError> {
        let accounts = AccountRepository::new(self.db);

        if accounts.superuser_exists().await? {
            return Ok(None);
        }

        let (Some(username), Some(password)) = (username, password) else {
            tracing::warn!(
                "No superuser exists. Set SUPERUSER_USERNAME and SUPERUSER_PASSWORD to create one on startup"
            );
            return Ok(None);
        };

        if accounts.username_exists(username).await? {
            tracing::warn!(
                username,
                "Cannot create superuser, an account with that username already exists"
            );
            return Ok(None);
        }

        let account = accounts
            .create(CreateAccountParams {
                username: username.to_string(),
                password_hash: hash_password(password)?,
                is_staff: true,
                is_superuser: true,
            })
            .await?;

        tracing::info!(username, "Created superuser account");

        Ok(Some(account))
    }

    async fn registration_tournament(
        &self,
        tournament_id: Option<i32>,
    ) -> Result<Tournament, AppError> {
        let repo = TournamentRepository::new(self.db);

        match tournament_id {
            Some(id) => repo
                .find_by_id(id)
                .await?
                .ok_or_else(|| AppError::NotFound("Tournament not found".to_string())),
            None => repo.find_default().await?.ok_or_else(|| {
                AppError::BadRequest("No tournament is open for registration".to_string())
            }),
        }
    }
}

/// Picks a free username, appending the current team count on a clash.
async fn unique_username<C: ConnectionTrait>(db: &C, base: String) -> Result<String, DbErr> {
    let accounts = AccountRepository::new(db);

    if !accounts.username_exists(&base).await? {
        return Ok(base);
    }

    let mut suffix = TeamRepository::new(db).count().await?;
    loop {
        let candidate = format!("{}_{}", base, suffix);
        if !accounts.username_exists(&candidate).await? {
            return Ok(candidate);
        }
        suffix += 1;
    }
}
