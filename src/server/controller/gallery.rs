use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        gallery::{GalleryImageDto, GalleryImageFormDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::gallery_image::GalleryImageParams,
        service::gallery::GalleryService,
        state::AppState,
    },
};

/// Tag for grouping gallery endpoints in OpenAPI documentation
pub static GALLERY_TAG: &str = "gallery";

/// List gallery images by display order, newest uploads first within the same order.
#[utoipa::path(
    get,
    path = "/api/gallery",
    tag = GALLERY_TAG,
    responses(
        (status = 200, description = "Gallery images", body = Vec<GalleryImageDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_images(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let images = GalleryService::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(images.into_iter().map(|i| i.into_dto()).collect::<Vec<_>>()),
    ))
}

#[utoipa::path(
    get,
    path = "/api/gallery/{id}",
    tag = GALLERY_TAG,
    params(
        ("id" = i32, Path, description = "Gallery image ID")
    ),
    responses(
        (status = 200, description = "Gallery image", body = GalleryImageDto),
        (status = 404, description = "Gallery image not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_image_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    match GalleryService::new(&state.db).get_by_id(id).await? {
        Some(image) => Ok((StatusCode::OK, Json(image.into_dto()))),
        None => Err(AppError::NotFound("Gallery image not found".to_string())),
    }
}

/// Add an image to the gallery. The image is referenced by URL or storage path.
///
/// # Access Control
/// - `Admin` - Only staff and superusers can manage the gallery
#[utoipa::path(
    post,
    path = "/api/gallery",
    tag = GALLERY_TAG,
    request_body = GalleryImageFormDto,
    responses(
        (status = 201, description = "Gallery image created", body = GalleryImageDto),
        (status = 400, description = "Title or image missing", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Account has no admin permissions", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_image(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<GalleryImageFormDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    let image = GalleryService::new(&state.db)
        .create(GalleryImageParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(image.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/gallery/{id}",
    tag = GALLERY_TAG,
    params(
        ("id" = i32, Path, description = "Gallery image ID")
    ),
    request_body = GalleryImageFormDto,
    responses(
        (status = 200, description = "Gallery image updated", body = GalleryImageDto),
        (status = 400, description = "Title or image missing", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Account has no admin permissions", body = ErrorDto),
        (status = 404, description = "Gallery image not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_image(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<GalleryImageFormDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    let image = GalleryService::new(&state.db)
        .update(id, GalleryImageParams::from_dto(payload))
        .await?;

    match image {
        Some(image) => Ok((StatusCode::OK, Json(image.into_dto()))),
        None => Err(AppError::NotFound("Gallery image not found".to_string())),
    }
}

#[utoipa::path(
    delete,
    path = "/api/gallery/{id}",
    tag = GALLERY_TAG,
    params(
        ("id" = i32, Path, description = "Gallery image ID")
    ),
    responses(
        (status = 204, description = "Gallery image deleted"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Account has no admin permissions", body = ErrorDto),
        (status = 404, description = "Gallery image not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_image(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    if GalleryService::new(&state.db).delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Gallery image not found".to_string()))
    }
}
