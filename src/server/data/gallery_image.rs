//! Gallery image data repository.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder};

use crate::server::model::gallery_image::{GalleryImage, GalleryImageParams};

pub struct GalleryImageRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> GalleryImageRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: GalleryImageParams) -> Result<GalleryImage, DbErr> {
        let entity = entity::gallery_image::ActiveModel {
            id: ActiveValue::NotSet,
            title: ActiveValue::Set(params.title),
            image: ActiveValue::Set(params.image),
            description: ActiveValue::Set(params.description),
            uploaded_at: ActiveValue::Set(Utc::now()),
            order: ActiveValue::Set(params.order),
        }
        .insert(self.db)
        .await?;

        Ok(GalleryImage::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<GalleryImage>, DbErr> {
        let entity = entity::prelude::GalleryImage::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(GalleryImage::from_entity))
    }

    /// Images by display order, newest upload first within the same order.
    pub async fn get_all(&self) -> Result<Vec<GalleryImage>, DbErr> {
        let entities = entity::prelude::GalleryImage::find()
            .order_by_asc(entity::gallery_image::Column::Order)
            .order_by_desc(entity::gallery_image::Column::UploadedAt)
            .order_by_desc(entity::gallery_image::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(GalleryImage::from_entity).collect())
    }

    /// Replaces an image's editable fields. The upload timestamp is kept.
    pub async fn update(
        &self,
        id: i32,
        params: GalleryImageParams,
    ) -> Result<Option<GalleryImage>, DbErr> {
        let Some(existing) = entity::prelude::GalleryImage::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::gallery_image::ActiveModel = existing.into();
        active.title = ActiveValue::Set(params.title);
        active.image = ActiveValue::Set(params.image);
        active.description = ActiveValue::Set(params.description);
        active.order = ActiveValue::Set(params.order);

        let entity = active.update(self.db).await?;

        Ok(Some(GalleryImage::from_entity(entity)))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::GalleryImage::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
