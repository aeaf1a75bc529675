use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        game_match::{MatchDto, MatchFormDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::game_match::{MatchDetail, MatchParams},
        service::game_match::GameMatchService,
        state::AppState,
    },
};

/// Tag for grouping match endpoints in OpenAPI documentation
pub static MATCH_TAG: &str = "match";

fn into_dtos(matches: Vec<MatchDetail>) -> Vec<MatchDto> {
    matches.into_iter().map(|m| m.into_dto()).collect()
}

/// List all matches, most recently played first.
#[utoipa::path(
    get,
    path = "/api/matches",
    tag = MATCH_TAG,
    responses(
        (status = 200, description = "All matches", body = Vec<MatchDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_matches(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let matches = GameMatchService::new(&state.db).get_all().await?;

    Ok((StatusCode::OK, Json(into_dtos(matches))))
}

/// List the 10 most recently played matches.
#[utoipa::path(
    get,
    path = "/api/matches/recent",
    tag = MATCH_TAG,
    responses(
        (status = 200, description = "Most recent matches", body = Vec<MatchDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_recent_matches(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let matches = GameMatchService::new(&state.db).get_recent().await?;

    Ok((StatusCode::OK, Json(into_dtos(matches))))
}

#[utoipa::path(
    get,
    path = "/api/matches/finished",
    tag = MATCH_TAG,
    responses(
        (status = 200, description = "Finished matches", body = Vec<MatchDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_finished_matches(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let matches = GameMatchService::new(&state.db).get_finished().await?;

    Ok((StatusCode::OK, Json(into_dtos(matches))))
}

#[utoipa::path(
    get,
    path = "/api/matches/{id}",
    tag = MATCH_TAG,
    params(
        ("id" = i32, Path, description = "Match ID")
    ),
    responses(
        (status = 200, description = "Match", body = MatchDto),
        (status = 404, description = "Match not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_match_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    match GameMatchService::new(&state.db).get_by_id(id).await? {
        Some(game_match) => Ok((StatusCode::OK, Json(game_match.into_dto()))),
        None => Err(AppError::NotFound("Match not found".to_string())),
    }
}

/// Create a match.
///
/// A match created as finished updates both teams' classifications in the same
/// transaction.
///
/// # Access Control
/// - `Admin` - Only staff and superusers can create matches
///
/// # Returns
/// - `201 Created` - Match created
/// - `400 Bad Request` - Negative goals or a team playing itself
/// - `404 Not Found` - A team does not exist
/// - `409 Conflict` - Teams belong to different tournaments
#[utoipa::path(
    post,
    path = "/api/matches",
    tag = MATCH_TAG,
    request_body = MatchFormDto,
    responses(
        (status = 201, description = "Match created", body = MatchDto),
        (status = 400, description = "Invalid match data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Account has no admin permissions", body = ErrorDto),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 409, description = "Teams belong to different tournaments", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_match(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<MatchFormDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    let game_match = GameMatchService::new(&state.db)
        .create(MatchParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(game_match.into_dto())))
}

/// Replace a match.
///
/// Finishing a pending match updates both classifications. A finished match can
/// no longer change teams or goals.
///
/// # Access Control
/// - `Admin` - Only staff and superusers can update matches
///
/// # Returns
/// - `200 OK` - Match updated
/// - `404 Not Found` - Match or a team does not exist
/// - `409 Conflict` - Match is already finished, or teams belong to different tournaments
#[utoipa::path(
    put,
    path = "/api/matches/{id}",
    tag = MATCH_TAG,
    params(
        ("id" = i32, Path, description = "Match ID")
    ),
    request_body = MatchFormDto,
    responses(
        (status = 200, description = "Match updated", body = MatchDto),
        (status = 400, description = "Invalid match data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Account has no admin permissions", body = ErrorDto),
        (status = 404, description = "Match or team not found", body = ErrorDto),
        (status = 409, description = "Finished match cannot change", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_match(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<MatchFormDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    let game_match = GameMatchService::new(&state.db)
        .update(id, MatchParams::from_dto(payload))
        .await?;

    match game_match {
        Some(game_match) => Ok((StatusCode::OK, Json(game_match.into_dto()))),
        None => Err(AppError::NotFound("Match not found".to_string())),
    }
}

/// Delete a match. Standings already applied are kept.
///
/// # Access Control
/// - `Admin` - Only staff and superusers can delete matches
#[utoipa::path(
    delete,
    path = "/api/matches/{id}",
    tag = MATCH_TAG,
    params(
        ("id" = i32, Path, description = "Match ID")
    ),
    responses(
        (status = 204, description = "Match deleted"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Account has no admin permissions", body = ErrorDto),
        (status = 404, description = "Match not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_match(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    if GameMatchService::new(&state.db).delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Match not found".to_string()))
    }
}
