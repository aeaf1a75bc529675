use crate::server::{data::tournament::TournamentRepository, model::tournament::TournamentParams};
use chrono::NaiveDate;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod find_default;
mod name_taken;
mod update;

fn date(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, month, day).unwrap()
}
