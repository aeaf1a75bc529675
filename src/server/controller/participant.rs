use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        participant::{ParticipantDto, ParticipantFormDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::participant::ParticipantParams,
        service::participant::ParticipantService,
        state::AppState,
    },
};

/// Tag for grouping participant endpoints in OpenAPI documentation
pub static PARTICIPANT_TAG: &str = "participant";

/// List all participants ordered by name.
#[utoipa::path(
    get,
    path = "/api/participants",
    tag = PARTICIPANT_TAG,
    responses(
        (status = 200, description = "All participants", body = Vec<ParticipantDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_participants(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let participants = ParticipantService::new(&state.db).get_all(false).await?;

    Ok((
        StatusCode::OK,
        Json(
            participants
                .into_iter()
                .map(|p| p.into_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}

/// List active participants ordered by name.
#[utoipa::path(
    get,
    path = "/api/participants/active",
    tag = PARTICIPANT_TAG,
    responses(
        (status = 200, description = "Active participants", body = Vec<ParticipantDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_active_participants(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let participants = ParticipantService::new(&state.db).get_all(true).await?;

    Ok((
        StatusCode::OK,
        Json(
            participants
                .into_iter()
                .map(|p| p.into_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}

#[utoipa::path(
    get,
    path = "/api/participants/{id}",
    tag = PARTICIPANT_TAG,
    params(
        ("id" = i32, Path, description = "Participant ID")
    ),
    responses(
        (status = 200, description = "Participant", body = ParticipantDto),
        (status = 404, description = "Participant not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_participant_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    match ParticipantService::new(&state.db).get_by_id(id).await? {
        Some(participant) => Ok((StatusCode::OK, Json(participant.into_dto()))),
        None => Err(AppError::NotFound("Participant not found".to_string())),
    }
}

/// Add a participant to a team.
///
/// # Access Control
/// - `Admin` - Only staff and superusers can add participants
///
/// # Returns
/// - `201 Created` - Participant created
/// - `400 Bad Request` - Blank name
/// - `404 Not Found` - Team does not exist
#[utoipa::path(
    post,
    path = "/api/participants",
    tag = PARTICIPANT_TAG,
    request_body = ParticipantFormDto,
    responses(
        (status = 201, description = "Participant created", body = ParticipantDto),
        (status = 400, description = "Invalid participant data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Account has no admin permissions", body = ErrorDto),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_participant(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<ParticipantFormDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    let participant = ParticipantService::new(&state.db)
        .create(ParticipantParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(participant.into_dto())))
}

/// Replace a participant.
///
/// # Access Control
/// - `Admin` - Only staff and superusers can update participants
#[utoipa::path(
    put,
    path = "/api/participants/{id}",
    tag = PARTICIPANT_TAG,
    params(
        ("id" = i32, Path, description = "Participant ID")
    ),
    request_body = ParticipantFormDto,
    responses(
        (status = 200, description = "Participant updated", body = ParticipantDto),
        (status = 400, description = "Invalid participant data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Account has no admin permissions", body = ErrorDto),
        (status = 404, description = "Participant or team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_participant(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<ParticipantFormDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    let participant = ParticipantService::new(&state.db)
        .update(id, ParticipantParams::from_dto(payload))
        .await?;

    match participant {
        Some(participant) => Ok((StatusCode::OK, Json(participant.into_dto()))),
        None => Err(AppError::NotFound("Participant not found".to_string())),
    }
}

#[utoipa::path(
    delete,
    path = "/api/participants/{id}",
    tag = PARTICIPANT_TAG,
    params(
        ("id" = i32, Path, description = "Participant ID")
    ),
    responses(
        (status = 204, description = "Participant deleted"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Account has no admin permissions", body = ErrorDto),
        (status = 404, description = "Participant not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_participant(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    if ParticipantService::new(&state.db).delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Participant not found".to_string()))
    }
}
