use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        tournament::{TournamentDto, TournamentFormDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::tournament::TournamentParams,
        service::tournament::TournamentService,
        state::AppState,
    },
};

/// Tag for grouping tournament endpoints in OpenAPI documentation
pub static TOURNAMENT_TAG: &str = "tournament";

/// List all tournaments ordered by start date.
#[utoipa::path(
    get,
    path = "/api/tournaments",
    tag = TOURNAMENT_TAG,
    responses(
        (status = 200, description = "All tournaments", body = Vec<TournamentDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_tournaments(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let tournaments = TournamentService::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(
            tournaments
                .into_iter()
                .map(|t| t.into_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}

#[utoipa::path(
    get,
    path = "/api/tournaments/{id}",
    tag = TOURNAMENT_TAG,
    params(
        ("id" = i32, Path, description = "Tournament ID")
    ),
    responses(
        (status = 200, description = "Tournament", body = TournamentDto),
        (status = 404, description = "Tournament not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_tournament_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    match TournamentService::new(&state.db).get_by_id(id).await? {
        Some(tournament) => Ok((StatusCode::OK, Json(tournament.into_dto()))),
        None => Err(AppError::NotFound("Tournament not found".to_string())),
    }
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
    path = "/api/tournaments",
    tag = TOURNAMENT_TAG,
    request_body = TournamentFormDto,
    responses(
        (status = 201, description = "Tournament created", body = TournamentDto),
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

    Ok((StatusCode::CREATED, Json(tournament.into_dto())))
}

/// Replace a tournament's name and dates.
///
/// # Access Control
/// - `Admin` - Only staff and superusers can update tournaments
#[utoipa::path(
    put,
    path = "/api/tournaments/{id}",
    tag = TOURNAMENT_TAG,
    params(
        ("id" = i32, Path, description = "Tournament ID")
    ),
    request_body = TournamentFormDto,
    responses(
        (status = 200, description = "Tournament updated", body = TournamentDto),
        (status = 400, description = "Invalid tournament data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Account has no admin permissions", body = ErrorDto),
        (status = 404, description = "Tournament not found", body = ErrorDto),
        (status = 409, description = "Tournament name already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_tournament(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<TournamentFormDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    let tournament = TournamentService::new(&state.db)
        .update(id, TournamentParams::from_dto(payload))
        .await?;

    match tournament {
        Some(tournament) => Ok((StatusCode::OK, Json(tournament.into_dto()))),
        None => Err(AppError::NotFound("Tournament not found".to_string())),
    }
}

/// Delete a tournament together with its teams.
///
/// # Access Control
/// - `Admin` - Only staff and superusers can delete tournaments
#[utoipa::path(
    delete,
    path = "/api/tournaments/{id}",
    tag = TOURNAMENT_TAG,
    params(
        ("id" = i32, Path, description = "Tournament ID")
    ),
    responses(
        (status = 204, description = "Tournament deleted"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Account has no admin permissions", body = ErrorDto),
        (status = 404, description = "Tournament not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_tournament(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    if TournamentService::new(&state.db).delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Tournament not found".to_string()))
    }
}
