use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, StatusDto},
        match_series::{MatchSeriesDto, MatchSeriesFilterDto, MatchSeriesFormDto, SeriesMatchDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::match_series::MatchSeriesParams,
        service::match_series::MatchSeriesService,
        state::AppState,
    },
};

/// Tag for grouping match series endpoints in OpenAPI documentation
pub static MATCH_SERIES_TAG: &str = "match-series";

/// List match series, newest first, optionally only active or inactive ones.
#[utoipa::path(
    get,
    path = "/api/match-series",
    tag = MATCH_SERIES_TAG,
    params(MatchSeriesFilterDto),
    responses(
        (status = 200, description = "Match series", body = Vec<MatchSeriesDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_match_series(
    State(state): State<AppState>,
    Query(filter): Query<MatchSeriesFilterDto>,
) -> Result<impl IntoResponse, AppError> {
    let series = MatchSeriesService::new(&state.db)
        .get_all(filter.active)
        .await?;

    Ok((
        StatusCode::OK,
        Json(series.into_iter().map(|s| s.into_dto()).collect::<Vec<_>>()),
    ))
}

#[utoipa::path(
    get,
    path = "/api/match-series/{id}",
    tag = MATCH_SERIES_TAG,
    params(
        ("id" = i32, Path, description = "Match series ID")
    ),
    responses(
        (status = 200, description = "Match series with its matches", body = MatchSeriesDto),
        (status = 404, description = "Match series not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_match_series_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    match MatchSeriesService::new(&state.db).get_by_id(id).await? {
        Some(series) => Ok((StatusCode::OK, Json(series.into_dto()))),
        None => Err(AppError::NotFound("Match series not found".to_string())),
    }
}

/// Create an empty match series.
///
/// # Access Control
/// - `Admin` - Only staff and superusers can create match series
#[utoipa::path(
    post,
    path = "/api/match-series",
    tag = MATCH_SERIES_TAG,
    request_body = MatchSeriesFormDto,
    responses(
        (status = 201, description = "Match series created", body = MatchSeriesDto),
        (status = 400, description = "Blank name", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Account has no admin permissions", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_match_series(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<MatchSeriesFormDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    let series = MatchSeriesService::new(&state.db)
        .create(MatchSeriesParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(series.into_dto())))
}

/// Replace a match series' name, description and active flag.
///
/// # Access Control
/// - `Admin` - Only staff and superusers can update match series
#[utoipa::path(
    put,
    path = "/api/match-series/{id}",
    tag = MATCH_SERIES_TAG,
    params(
        ("id" = i32, Path, description = "Match series ID")
    ),
    request_body = MatchSeriesFormDto,
    responses(
        (status = 200, description = "Match series updated", body = MatchSeriesDto),
        (status = 400, description = "Blank name", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Account has no admin permissions", body = ErrorDto),
        (status = 404, description = "Match series not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_match_series(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<MatchSeriesFormDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    let series = MatchSeriesService::new(&state.db)
        .update(id, MatchSeriesParams::from_dto(payload))
        .await?;

    match series {
        Some(series) => Ok((StatusCode::OK, Json(series.into_dto()))),
        None => Err(AppError::NotFound("Match series not found".to_string())),
    }
}

#[utoipa::path(
    delete,
    path = "/api/match-series/{id}",
    tag = MATCH_SERIES_TAG,
    params(
        ("id" = i32, Path, description = "Match series ID")
    ),
    responses(
        (status = 204, description = "Match series deleted"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Account has no admin permissions", body = ErrorDto),
        (status = 404, description = "Match series not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_match_series(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    if MatchSeriesService::new(&state.db).delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Match series not found".to_string()))
    }
}

/// Add an existing match to a series.
///
/// # Access Control
/// - `Admin` - Only staff and superusers can change a series
///
/// # Returns
/// - `200 OK` - Match is part of the series
/// - `400 Bad Request` - `match_id` missing
/// - `404 Not Found` - Series or match does not exist
#[utoipa::path(
    post,
    path = "/api/match-series/{id}/add-match",
    tag = MATCH_SERIES_TAG,
    params(
        ("id" = i32, Path, description = "Match series ID")
    ),
    request_body = SeriesMatchDto,
    responses(
        (status = 200, description = "Match added", body = StatusDto),
        (status = 400, description = "Match ID missing", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Account has no admin permissions", body = ErrorDto),
        (status = 404, description = "Series or match not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn add_match(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<SeriesMatchDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    let match_id = require_match_id(payload)?;
    MatchSeriesService::new(&state.db)
        .add_match(id, match_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(StatusDto {
            status: "match added".to_string(),
        }),
    ))
}

/// Remove a match from a series. The match itself is kept.
///
/// # Access Control
/// - `Admin` - Only staff and superusers can change a series
#[utoipa::path(
    post,
    path = "/api/match-series/{id}/remove-match",
    tag = MATCH_SERIES_TAG,
    params(
        ("id" = i32, Path, description = "Match series ID")
    ),
    request_body = SeriesMatchDto,
    responses(
        (status = 200, description = "Match removed", body = StatusDto),
        (status = 400, description = "Match ID missing", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Account has no admin permissions", body = ErrorDto),
        (status = 404, description = "Series not found or match not in it", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn remove_match(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<SeriesMatchDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    let match_id = require_match_id(payload)?;
    MatchSeriesService::new(&state.db)
        .remove_match(id, match_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(StatusDto {
            status: "match removed".to_string(),
        }),
    ))
}

fn require_match_id(payload: SeriesMatchDto) -> Result<i32, AppError> {
    payload
        .match_id
        .ok_or_else(|| AppError::BadRequest("match_id is required".to_string()))
}
