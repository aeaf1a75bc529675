use crate::server::{data::team::TeamRepository, model::team::Team};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_opponents;
mod get_ungrouped;
mod name_taken;
mod set_group;
mod set_group_if_ungrouped;
mod with_details;
