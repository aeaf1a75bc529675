use crate::server::{data::auth_token::AuthTokenRepository, util::token::TOKEN_LENGTH};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod delete_by_account;
mod find_account_by_key;
mod get_or_create;
