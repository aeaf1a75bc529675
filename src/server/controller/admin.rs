use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        auth::{AdminLoginDto, AdminSessionDto},
        classification::RankingResultDto,
        tournament::{
            AdminTournamentListDto, AssignGroupsDto, AssignGroupsResultDto, RandomGroupsDto,
            RandomGroupsResultDto, TournamentCreatedDto, TournamentFormDto, TournamentTeamsDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            group::{GroupAssignment, RandomGroupsParams},
            tournament::TournamentParams,
        },
        service::{
            auth::AuthService, classification::ClassificationService, group::GroupService,
            tournament::TournamentService,
        },
        state::AppState,
    },
};

/// Tag for grouping admin endpoints in OpenAPI documentation
pub static ADMIN_TAG: &str = "admin";

/// Log in with a staff or superuser account.
///
/// # Returns
/// - `200 OK` - Credentials accepted
/// - `400 Bad Request` - Username or password missing
/// - `401 Unauthorized` - Invalid credentials
/// - `403 Forbidden` - Account is neither staff nor superuser
#[utoipa::path(
    post,
    path = "/api/admin/login",
    tag = ADMIN_TAG,
    request_body = AdminLoginDto,
    responses(
        (status = 200, description = "Logged in", body = AdminSessionDto),
        (status = 400, description = "Username or password missing", body = ErrorDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 403, description = "Account has no admin permissions", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<AdminLoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let session = AuthService::new(&state.db)
        .login_admin(&payload.username, &payload.password)
        .await?;

    Ok((StatusCode::OK, Json(session.into_dto("Admin login successful"))))
}

/// List every tournament with its team count and teams per group.
///
/// # Access Control
/// - `Admin` - Only staff and superusers can view the overview
#[utoipa::path(
    get,
    path = "/api/admin/tournaments",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Tournament overview", body = AdminTournamentListDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Account has no admin permissions", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_tournaments(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    let overviews = TournamentService::new(&state.db).get_overviews().await?;
    let tournaments: Vec<_> = overviews.into_iter().map(|o| o.into_dto()).collect();

    Ok((
        StatusCode::OK,
        Json(AdminTournamentListDto {
            total_tournaments: tournaments.len() as u64,
            tournaments,
        }),
    ))
}

/// Create a tournament.
///
/// # Access Control
/// - `Admin` - Only staff and superusers can create tournaments
///
/// # Returns
/// - `201 Created` - Tournament created
/// - `400 Bad Request` - Blank name or end date before start date
/// - `409 Conflict` - Tournament name already taken
#[utoipa::path(
    post,
    path = "/api/admin/tournaments",
    tag = ADMIN_TAG,
    request_body = TournamentFormDto,
    responses(
        (status = 201, description = "Tournament created", body = TournamentCreatedDto),
        (status = 400, description = "Invalid tournament data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Account has no admin permissions", body = ErrorDto),
        (status = 409, description = "Tournament name already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_tournament(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<TournamentFormDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    let tournament = TournamentService::new(&state.db)
        .create(TournamentParams::from_dto(payload))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(TournamentCreatedDto {
            message: "Tournament created successfully".to_string(),
            tournament: tournament.into_dto(),
        }),
    ))
}

/// Get a tournament's teams grouped by group label.
///
/// # Access Control
/// - `Admin` - Only staff and superusers can view tournament teams
#[utoipa::path(
    get,
    path = "/api/admin/tournaments/{id}/teams",
    tag = ADMIN_TAG,
    params(
        ("id" = i32, Path, description = "Tournament ID")
    ),
    responses(
        (status = 200, description = "Teams of the tournament", body = TournamentTeamsDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Account has no admin permissions", body = ErrorDto),
        (status = 404, description = "Tournament not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_tournament_teams(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    match TournamentService::new(&state.db).get_teams(id).await? {
        Some(teams) => Ok((StatusCode::OK, Json(teams.into_dto()))),
        None => Err(AppError::NotFound("Tournament not found".to_string())),
    }
}

/// Assign groups to teams of a tournament.
///
/// Every assignment is applied in one transaction; if any team is not part of the
/// tournament nothing changes.
///
/// # Access Control
/// - `Admin` - Only staff and superusers can assign groups
///
/// # Returns
/// - `200 OK` - Groups assigned
/// - `400 Bad Request` - No assignments provided
/// - `404 Not Found` - Tournament or a team does not exist in the tournament
#[utoipa::path(
    post,
    path = "/api/admin/tournaments/{id}/assign-groups",
    tag = ADMIN_TAG,
    params(
        ("id" = i32, Path, description = "Tournament ID")
    ),
    request_body = AssignGroupsDto,
    responses(
        (status = 200, description = "Groups assigned", body = AssignGroupsResultDto),
        (status = 400, description = "No assignments provided", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Account has no admin permissions", body = ErrorDto),
        (status = 404, description = "Tournament or team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn assign_groups(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<AssignGroupsDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    let assignments = GroupAssignment::from_dto(payload)?;
    let teams = GroupService::new(&state.db).assign(id, assignments).await?;

    Ok((
        StatusCode::OK,
        Json(AssignGroupsResultDto {
            message: format!("Groups assigned to {} teams", teams.len()),
            updated_teams: teams.into_iter().map(|t| t.into_dto()).collect(),
        }),
    ))
}

/// Randomly assign groups to the teams of a tournament.
///
/// Teams that already have a group keep it unless `overwrite` is set. The body
/// is optional and defaults to groups `A`, `B` and `C`.
///
/// # Access Control
/// - `Admin` - Only staff and superusers can assign groups
#[utoipa::path(
    post,
    path = "/api/admin/tournaments/{id}/random-groups",
    tag = ADMIN_TAG,
    params(
        ("id" = i32, Path, description = "Tournament ID")
    ),
    request_body(content = RandomGroupsDto, description = "Candidate groups", content_type = "application/json"),
    responses(
        (status = 200, description = "Groups drawn", body = RandomGroupsResultDto),
        (status = 400, description = "No usable group labels", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Account has no admin permissions", body = ErrorDto),
        (status = 404, description = "Tournament not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn random_groups(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    payload: Option<Json<RandomGroupsDto>>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    let dto = payload.map(|Json(dto)| dto).unwrap_or_default();
    let params = RandomGroupsParams::from_dto(dto)?;

    let teams = GroupService::new(&state.db).randomize(id, &params).await?;

    Ok((
        StatusCode::OK,
        Json(RandomGroupsResultDto {
            message: format!("Random groups assigned to {} teams", teams.len()),
            assigned_teams: teams.into_iter().map(|t| t.into_dto()).collect(),
            available_groups: params.groups,
        }),
    ))
}

/// Write 1-based positions for every classification of a tournament in table order.
///
/// # Access Control
/// - `Admin` - Only staff and superusers can rank a tournament
#[utoipa::path(
    post,
    path = "/api/admin/tournaments/{id}/rank",
    tag = ADMIN_TAG,
    params(
        ("id" = i32, Path, description = "Tournament ID")
    ),
    responses(
        (status = 200, description = "Positions assigned", body = RankingResultDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Account has no admin permissions", body = ErrorDto),
        (status = 404, description = "Tournament not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn rank_tournament(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    let table = ClassificationService::new(&state.db)
        .assign_positions(id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(RankingResultDto {
            message: format!("Positions assigned to {} teams", table.len()),
            classifications: table.into_iter().map(|c| c.into_dto()).collect(),
        }),
    ))
}
