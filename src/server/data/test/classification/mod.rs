use crate::server::{
    data::classification::ClassificationRepository, model::classification::ResultDelta,
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod apply_delta;
mod ensure;
mod get_table;
