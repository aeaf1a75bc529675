use crate::server::data::game_match::GameMatchRepository;
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_for_team;
mod get_recent;
mod update_if_unfinished;
mod with_details;
