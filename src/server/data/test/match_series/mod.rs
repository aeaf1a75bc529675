use crate::server::data::match_series::MatchSeriesRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod add_match;
mod get_all;
