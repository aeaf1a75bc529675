//! Gallery image factory.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating gallery images with customizable fields.
pub struct GalleryImageFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    image: String,
    order: i32,
    uploaded_at: DateTime<Utc>,
}

impl<'a> GalleryImageFactory<'a> {
    /// Creates a new GalleryImageFactory.
    ///
    /// Defaults:
    /// - title: `"Image {id}"`
    /// - image: `"gallery/image_{id}.jpg"`
    /// - order: `0`
    /// - uploaded_at: now
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Image {}", id),
            image: format!("gallery/image_{}.jpg", id),
            order: 0,
            uploaded_at: Utc::now(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn order(mut self, order: i32) -> Self {
        self.order = order;
        self
    }

    pub fn uploaded_at(mut self, uploaded_at: DateTime<Utc>) -> Self {
        self.uploaded_at = uploaded_at;
        self
    }

    /// Builds and inserts the image into the database.
    pub async fn build(self) -> Result<entity::gallery_image::Model, DbErr> {
        entity::gallery_image::ActiveModel {
            id: ActiveValue::NotSet,
            title: ActiveValue::Set(self.title),
            image: ActiveValue::Set(self.image),
            description: ActiveValue::Set(String::new()),
            uploaded_at: ActiveValue::Set(self.uploaded_at),
            order: ActiveValue::Set(self.order),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a gallery image with default values.
pub async fn create_gallery_image(
    db: &DatabaseConnection,
) -> Result<entity::gallery_image::Model, DbErr> {
    GalleryImageFactory::new(db).build().await
}
