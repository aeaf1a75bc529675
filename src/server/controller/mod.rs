//! HTTP request handlers.
//!
//! Each handler authenticates the request with an `AuthGuard` where the endpoint
//! requires it, converts the request DTO into domain parameters, calls a service and
//! converts the result back into a response DTO. Handlers carry `utoipa::path`
//! annotations collected into the OpenAPI document in `router`.

pub mod admin;
pub mod auth;
pub mod classification;
pub mod gallery;
pub mod game_match;
pub mod match_series;
pub mod participant;
pub mod team;
pub mod tournament;
