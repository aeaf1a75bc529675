use crate::server::{
    data::gallery_image::GalleryImageRepository, model::gallery_image::GalleryImageParams,
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_all;
mod update;
