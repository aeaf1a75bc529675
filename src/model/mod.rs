//! Wire-level data transfer objects shared by every API endpoint.
//!
//! These types describe exactly what goes over HTTP. Server-side domain models in
//! `server::model` convert into them with `into_dto()` and are built from them with
//! `from_dto()`.

pub mod api;
pub mod auth;
pub mod classification;
pub mod gallery;
pub mod game_match;
pub mod match_series;
pub mod participant;
pub mod team;
pub mod tournament;
