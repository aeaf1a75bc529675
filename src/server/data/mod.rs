//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//!
//! Every repository is generic over `ConnectionTrait`, so the same methods run against the
//! connection pool or inside a `DatabaseTransaction` when a service needs several writes to
//! commit together.

pub mod account;
pub mod auth_token;
pub mod classification;
pub mod gallery_image;
pub mod game_match;
pub mod match_series;
pub mod participant;
pub mod team;
pub mod tournament;

#[cfg(test)]
mod test;
