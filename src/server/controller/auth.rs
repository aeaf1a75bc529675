use axum::{extract::State, http::HeaderMap, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        auth::{
            AssignTournamentDto, LoadMatchDto, MatchRecordedDto, MyTeamDto, RegisterTeamDto,
            TeamAssignedDto, TeamLoginDto, TeamSessionDto,
        },
        game_match::MatchListDto,
        team::OpponentListDto,
        tournament::TournamentListDto,
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::auth::{LoadMatchParams, RegisterTeamParams},
        service::{
            auth::AuthService, game_match::GameMatchService, team::TeamService,
            tournament::TournamentService,
        },
        state::AppState,
    },
};

/// Tag for grouping team authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a team.
///
/// Creates the team's account, the team itself, its two participants and an API
/// token in one transaction. When no tournament is given the team joins the
/// tournament with the earliest start date.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `201 Created` - Team registered, token issued
/// - `400 Bad Request` - Missing fields, wrong participant count or no tournament available
/// - `404 Not Found` - Requested tournament does not exist
/// - `409 Conflict` - Team name already taken in the tournament
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterTeamDto,
    responses(
        (status = 201, description = "Team registered", body = TeamSessionDto),
        (status = 400, description = "Invalid registration data", body = ErrorDto),
        (status = 404, description = "Tournament not found", body = ErrorDto),
        (status = 409, description = "Team name already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterTeamDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = RegisterTeamParams::from_dto(payload)?;

    let session = AuthService::new(&state.db).register(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(session.into_dto("Team registered successfully")),
    ))
}

/// Log a team in with its team name and password.
///
/// Returns the account's existing token, creating one if the account has none.
///
/// # Returns
/// - `200 OK` - Credentials accepted
/// - `400 Bad Request` - Team name or password missing
/// - `401 Unauthorized` - Invalid credentials
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = TeamLoginDto,
    responses(
        (status = 200, description = "Logged in", body = TeamSessionDto),
        (status = 400, description = "Team name or password missing", body = ErrorDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<TeamLoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let session = AuthService::new(&state.db)
        .login_team(&payload.team_name, &payload.password)
        .await?;

    Ok((StatusCode::OK, Json(session.into_dto("Login successful"))))
}

/// Log out by deleting the caller's token.
///
/// # Access Control
/// - Any authenticated account
///
/// # Returns
/// - `200 OK` - Token deleted
/// - `401 Unauthorized` - Missing or invalid token
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Logged out", body = MessageDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let account = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    AuthService::new(&state.db).logout(account.id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Logout successful".to_string(),
        }),
    ))
}

/// Get the caller's team.
///
/// # Access Control
/// - Team account
///
/// # Returns
/// - `200 OK` - The caller's team
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - Account has no team
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "The caller's team", body = MyTeamDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Account has no team", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn me(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let (_, team) = AuthGuard::new(&state.db, &headers).require_team().await?;

    let team = TeamService::new(&state.db).detail(team).await?;

    Ok((
        StatusCode::OK,
        Json(MyTeamDto {
            team: team.into_dto(),
        }),
    ))
}

/// List the teams the caller can report a result against.
///
/// Opponents are the other teams of the caller's tournament and group. A team
/// without a group has no opponents.
///
/// # Access Control
/// - Team account
#[utoipa::path(
    get,
    path = "/api/auth/opponents",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Teams in the caller's group", body = OpponentListDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Account has no team", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn opponents(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let (_, team) = AuthGuard::new(&state.db, &headers).require_team().await?;

    let teams = TeamService::new(&state.db).opponents(&team).await?;

    Ok((
        StatusCode::OK,
        Json(OpponentListDto {
            teams: teams.into_iter().map(|t| t.into_opponent_dto()).collect(),
        }),
    ))
}

/// Report a finished match between the caller's team and an opponent.
///
/// The match is stored as finished and both teams' classifications are updated
/// in the same transaction.
///
/// # Access Control
/// - Team account
///
/// # Returns
/// - `201 Created` - Match recorded
/// - `400 Bad Request` - Negative goals, missing opponent or playing against itself
/// - `404 Not Found` - Opponent does not exist
/// - `409 Conflict` - Opponent is in another tournament or group, or the caller has no group
#[utoipa::path(
    post,
    path = "/api/auth/load-match",
    tag = AUTH_TAG,
    request_body = LoadMatchDto,
    responses(
        (status = 201, description = "Match recorded", body = MatchRecordedDto),
        (status = 400, description = "Invalid match data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Opponent not found", body = ErrorDto),
        (status = 409, description = "Opponent not in the caller's group", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn load_match(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<LoadMatchDto>,
) -> Result<impl IntoResponse, AppError> {
    let (_, team) = AuthGuard::new(&state.db, &headers).require_team().await?;

    let params = LoadMatchParams::from_dto(payload)?;
    let game_match = GameMatchService::new(&state.db)
        .load_match(&team, params)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MatchRecordedDto {
            message: "Match loaded successfully".to_string(),
            game_match: game_match.into_dto(),
        }),
    ))
}

/// List every match the caller's team took part in, newest first.
///
/// # Access Control
/// - Team account
#[utoipa::path(
    get,
    path = "/api/auth/my-matches",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Matches of the caller's team", body = MatchListDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Account has no team", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn my_matches(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let (_, team) = AuthGuard::new(&state.db, &headers).require_team().await?;

    let matches = GameMatchService::new(&state.db).my_matches(team.id).await?;

    Ok((
        StatusCode::OK,
        Json(MatchListDto {
            matches: matches.into_iter().map(|m| m.into_dto()).collect(),
        }),
    ))
}

/// Move the caller's team into another tournament.
///
/// # Access Control
/// - Team account
///
/// # Returns
/// - `200 OK` - Team moved
/// - `400 Bad Request` - Tournament ID missing
/// - `404 Not Found` - Tournament does not exist
/// - `409 Conflict` - Target tournament already has a team with this name
#[utoipa::path(
    post,
    path = "/api/auth/assign-tournament",
    tag = AUTH_TAG,
    request_body = AssignTournamentDto,
    responses(
        (status = 200, description = "Team moved", body = TeamAssignedDto),
        (status = 400, description = "Tournament ID missing", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Tournament not found", body = ErrorDto),
        (status = 409, description = "Team name already taken in the tournament", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn assign_tournament(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<AssignTournamentDto>,
) -> Result<impl IntoResponse, AppError> {
    let (_, team) = AuthGuard::new(&state.db, &headers).require_team().await?;

    let team = AuthService::new(&state.db)
        .assign_tournament(team, payload.tournament_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(TeamAssignedDto {
            message: "Tournament assigned successfully".to_string(),
            team: team.into_dto(),
        }),
    ))
}

/// List tournaments a team can join, newest first, with their team counts.
///
/// # Access Control
/// - Any authenticated account
#[utoipa::path(
    get,
    path = "/api/auth/tournaments",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Available tournaments", body = TournamentListDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn tournaments(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let tournaments = TournamentService::new(&state.db).get_available().await?;

    Ok((
        StatusCode::OK,
        Json(TournamentListDto {
            tournaments: tournaments
                .into_iter()
                .map(|(tournament, count)| tournament.into_summary_dto(count))
                .collect(),
        }),
    ))
}
