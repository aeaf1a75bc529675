//! Domain models and parameter types.
//!
//! Domain models are what repositories return and services pass around. They are
//! built from SeaORM entities at the repository boundary with `from_entity()` and
//! converted to wire DTOs at the controller boundary with `into_dto()`. Parameter
//! types (`*Params`) carry validated input from controllers into services.

pub mod account;
pub mod auth;
pub mod classification;
pub mod gallery_image;
pub mod game_match;
pub mod group;
pub mod match_series;
pub mod participant;
pub mod team;
pub mod tournament;
