//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Implementing core business rules and validation
//! - **Orchestration**: Coordinating multiple repository calls
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Transaction Management**: Committing multi-step writes such as registration or a
//!   match result and its standings update as one unit

pub mod auth;
pub mod classification;
pub mod gallery;
pub mod game_match;
pub mod group;
pub mod match_series;
pub mod participant;
pub mod standings;
pub mod team;
pub mod tournament;
