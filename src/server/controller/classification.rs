use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        classification::{
            ClassificationDto, ClassificationFilterDto, CreateClassificationDto,
            UpdateClassificationDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::classification::ClassificationService,
        state::AppState,
    },
};

/// Tag for grouping classification endpoints in OpenAPI documentation
pub static CLASSIFICATION_TAG: &str = "classification";

/// List classifications in table order.
///
/// Table order is points descending, then goals scored descending. Optionally
/// filtered by the team's group label and tournament.
#[utoipa::path(
    get,
    path = "/api/classifications",
    tag = CLASSIFICATION_TAG,
    params(ClassificationFilterDto),
    responses(
        (status = 200, description = "Classifications in table order", body = Vec<ClassificationDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_classifications(
    State(state): State<AppState>,
    Query(filter): Query<ClassificationFilterDto>,
) -> Result<impl IntoResponse, AppError> {
    let table = ClassificationService::new(&state.db)
        .get_table(filter.group.as_deref(), filter.tournament_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(table.into_iter().map(|c| c.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Standings table. Same ordering and filters as the classification list.
#[utoipa::path(
    get,
    path = "/api/classifications/table",
    tag = CLASSIFICATION_TAG,
    params(ClassificationFilterDto),
    responses(
        (status = 200, description = "Standings table", body = Vec<ClassificationDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_table(
    state: State<AppState>,
    filter: Query<ClassificationFilterDto>,
) -> Result<impl IntoResponse, AppError> {
    get_classifications(state, filter).await
}

#[utoipa::path(
    get,
    path = "/api/classifications/{id}",
    tag = CLASSIFICATION_TAG,
    params(
        ("id" = i32, Path, description = "Classification ID")
    ),
    responses(
        (status = 200, description = "Classification", body = ClassificationDto),
        (status = 404, description = "Classification not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_classification_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    match ClassificationService::new(&state.db).get_by_id(id).await? {
        Some(classification) => Ok((StatusCode::OK, Json(classification.into_dto()))),
        None => Err(AppError::NotFound("Classification not found".to_string())),
    }
}

/// Create an empty classification for a team.
///
/// # Access Control
/// - `Admin` - Only staff and superusers can create classifications
///
/// # Returns
/// - `201 Created` - Classification created with every counter at zero
/// - `404 Not Found` - Team does not exist
/// - `409 Conflict` - Team already has a classification
#[utoipa::path(
    post,
    path = "/api/classifications",
    tag = CLASSIFICATION_TAG,
    request_body = CreateClassificationDto,
    responses(
        (status = 201, description = "Classification created", body = ClassificationDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Account has no admin permissions", body = ErrorDto),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 409, description = "Team already has a classification", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_classification(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateClassificationDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    let classification = ClassificationService::new(&state.db)
        .create(payload.team_id, payload.position)
        .await?;

    Ok((StatusCode::CREATED, Json(classification.into_dto())))
}

/// Set a classification's ranking position.
///
/// # Access Control
/// - `Admin` - Only staff and superusers can update classifications
#[utoipa::path(
    put,
    path = "/api/classifications/{id}",
    tag = CLASSIFICATION_TAG,
    params(
        ("id" = i32, Path, description = "Classification ID")
    ),
    request_body = UpdateClassificationDto,
    responses(
        (status = 200, description = "Classification updated", body = ClassificationDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Account has no admin permissions", body = ErrorDto),
        (status = 404, description = "Classification not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_classification(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateClassificationDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    let classification = ClassificationService::new(&state.db)
        .update_position(id, payload.position)
        .await?;

    match classification {
        Some(classification) => Ok((StatusCode::OK, Json(classification.into_dto()))),
        None => Err(AppError::NotFound("Classification not found".to_string())),
    }
}

#[utoipa::path(
    delete,
    path = "/api/classifications/{id}",
    tag = CLASSIFICATION_TAG,
    params(
        ("id" = i32, Path, description = "Classification ID")
    ),
    responses(
        (status = 204, description = "Classification deleted"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Account has no admin permissions", body = ErrorDto),
        (status = 404, description = "Classification not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_classification(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    if ClassificationService::new(&state.db).delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Classification not found".to_string()))
    }
}
