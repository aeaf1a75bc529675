//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let tournament = factory::create_tournament(&db).await?;
//!     let team = factory::create_team(&db, tournament.id).await?;
//!
//!     // Create a team owned by an account
//!     let (account, tournament, team) = factory::helpers::create_registered_team(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let team = factory::team::TeamFactory::new(&db, tournament.id)
//!     .name("Los Pumas")
//!     .group(Some("A"))
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `account` - Create accounts with hashed passwords
//! - `tournament` - Create tournaments
//! - `team` - Create teams inside a tournament
//! - `participant` - Create team participants
//! - `classification` - Create standings rows
//! - `game_match` - Create matches between two teams
//! - `match_series` - Create match series
//! - `gallery_image` - Create gallery images
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod account;
pub mod classification;
pub mod gallery_image;
pub mod game_match;
pub mod helpers;
pub mod match_series;
pub mod participant;
pub mod team;
pub mod tournament;

pub use account::create_account;
pub use classification::create_classification;
pub use gallery_image::create_gallery_image;
pub use game_match::create_match;
pub use match_series::create_match_series;
pub use participant::create_participant;
pub use team::create_team;
pub use tournament::create_tournament;
