//! SeaORM entity definitions for the tournament schema.

pub mod prelude;

pub mod account;
pub mod auth_token;
pub mod classification;
pub mod gallery_image;
pub mod game_match;
pub mod match_series;
pub mod match_series_match;
pub mod participant;
pub mod team;
pub mod tournament;
