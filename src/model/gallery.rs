use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct GalleryImageDto {
    pub id: i32,
    pub title: String,
    /// URL or storage path of the image.
    pub image: String,
    pub description: String,
    pub uploaded_at: DateTime<Utc>,
    pub order: i32,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct GalleryImageFormDto {
    #[serde(default)]
    pub title: String,
    pub image: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub order: i32,
}
