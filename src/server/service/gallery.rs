//! Gallery image administration. Images are stored as a URL or path string.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::gallery_image::GalleryImageRepository,
    error::AppError,
    model::gallery_image::{GalleryImage, GalleryImageParams},
};

pub struct GalleryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GalleryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<GalleryImage>, AppError> {
        Ok(GalleryImageRepository::new(self.db).get_all().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<GalleryImage>, AppError> {
        Ok(GalleryImageRepository::new(self.db).find_by_id(id).await?)
    }

    pub async fn create(&self, params: GalleryImageParams) -> Result<GalleryImage, AppError> {
        validate(&params)?;

        Ok(GalleryImageRepository::new(self.db).create(params).await?)
    }

    pub async fn update(
        &self,
        id: i32,
        params: GalleryImageParams,
    ) -> Result<Option<GalleryImage>, AppError> {
        validate(&params)?;

        Ok(GalleryImageRepository::new(self.db).update(id, params).await?)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        Ok(GalleryImageRepository::new(self.db).delete(id).await?)
    }
}

fn validate(params: &GalleryImageParams) -> Result<(), AppError> {
    if params.title.trim().is_empty() || params.image.is_empty() {
        return Err(AppError::BadRequest(
            "Title and image are required".to_string(),
        ));
    }

    Ok(())
}
