use chrono::{DateTime, Utc};

use crate::model::gallery::{GalleryImageDto, GalleryImageFormDto};

#[derive(Debug, Clone, PartialEq)]
pub struct GalleryImage {
    pub id: i32,
    pub title: String,
    pub image: String,
    pub description: String,
    pub uploaded_at: DateTime<Utc>,
    pub order: i32,
}

impl GalleryImage {
    pub fn into_dto(self) -> GalleryImageDto {
        GalleryImageDto {
            id: self.id,
            title: self.title,
            image: self.image,
            description: self.description,
            uploaded_at: self.uploaded_at,
            order: self.order,
        }
    }

    pub fn from_entity(entity: entity::gallery_image::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            image: entity.image,
            description: entity.description,
            uploaded_at: entity.uploaded_at,
            order: entity.order,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GalleryImageParams {
    pub title: String,
    pub image: String,
    pub description: String,
    pub order: i32,
}

impl GalleryImageParams {
    pub fn from_dto(dto: GalleryImageFormDto) -> Self {
        Self {
            title: dto.title,
            image: dto.image.trim().to_string(),
            description: dto.description,
            order: dto.order,
        }
    }
}
