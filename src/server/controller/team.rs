use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        team::{TeamDto, TeamFilterDto, TeamFormDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::team::{CreateTeamParams, UpdateTeamParams},
        service::team::TeamService,
        state::AppState,
    },
};

/// Tag for grouping team endpoints in OpenAPI documentation
pub static TEAM_TAG: &str = "team";

/// List teams ordered by name.
///
/// Optionally filtered by group label and tournament.
#[utoipa::path(
    get,
    path = "/api/teams",
    tag = TEAM_TAG,
    params(TeamFilterDto),
    responses(
        (status = 200, description = "Matching teams", body = Vec<TeamDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_teams(
    State(state): State<AppState>,
    Query(filter): Query<TeamFilterDto>,
) -> Result<impl IntoResponse, AppError> {
    let teams = TeamService::new(&state.db)
        .get_filtered(filter.group.as_deref(), filter.tournament_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(teams.into_iter().map(|t| t.into_dto()).collect::<Vec<_>>()),
    ))
}

#[utoipa::path(
    get,
    path = "/api/teams/{id}",
    tag = TEAM_TAG,
    params(
        ("id" = i32, Path, description = "Team ID")
    ),
    responses(
        (status = 200, description = "Team", body = TeamDto),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_team_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    match TeamService::new(&state.db).get_by_id(id).await? {
        Some(team) => Ok((StatusCode::OK, Json(team.into_dto()))),
        None => Err(AppError::NotFound("Team not found".to_string())),
    }
}

/// Create a team without an account.
///
/// # Access Control
/// - `Admin` - Only staff and superusers can create teams directly
///
/// # Returns
/// - `201 Created` - Team created
/// - `400 Bad Request` - Blank name
/// - `404 Not Found` - Tournament does not exist
/// - `409 Conflict` - Name already taken in the tournament
#[utoipa::path(
    post,
    path = "/api/teams",
    tag = TEAM_TAG,
    request_body = TeamFormDto,
    responses(
        (status = 201, description = "Team created", body = TeamDto),
        (status = 400, description = "Invalid team data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Account has no admin permissions", body = ErrorDto),
        (status = 404, description = "Tournament not found", body = ErrorDto),
        (status = 409, description = "Team name already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_team(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<TeamFormDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    let team = TeamService::new(&state.db)
        .create(CreateTeamParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(team.into_dto())))
}

/// Replace a team's name, tournament and group.
///
/// # Access Control
/// - `Admin` - Only staff and superusers can update teams
#[utoipa::path(
    put,
    path = "/api/teams/{id}",
    tag = TEAM_TAG,
    params(
        ("id" = i32, Path, description = "Team ID")
    ),
    request_body = TeamFormDto,
    responses(
        (status = 200, description = "Team updated", body = TeamDto),
        (status = 400, description = "Invalid team data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Account has no admin permissions", body = ErrorDto),
        (status = 404, description = "Team or tournament not found", body = ErrorDto),
        (status = 409, description = "Team name already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_team(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<TeamFormDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    let team = TeamService::new(&state.db)
        .update(UpdateTeamParams::from_dto(id, payload))
        .await?;

    match team {
        Some(team) => Ok((StatusCode::OK, Json(team.into_dto()))),
        None => Err(AppError::NotFound("Team not found".to_string())),
    }
}

/// Delete a team, its participants and its classification.
///
/// # Access Control
/// - `Admin` - Only staff and superusers can delete teams
#[utoipa::path(
    delete,
    path = "/api/teams/{id}",
    tag = TEAM_TAG,
    params(
        ("id" = i32, Path, description = "Team ID")
    ),
    responses(
        (status = 204, description = "Team deleted"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Account has no admin permissions", body = ErrorDto),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_team(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    if TeamService::new(&state.db).delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Team not found".to_string()))
    }
}
