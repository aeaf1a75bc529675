use crate::server::{data::account::AccountRepository, model::account::CreateAccountParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_username;
mod superuser_exists;
