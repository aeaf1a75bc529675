//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a tournament with a single ungrouped team in it.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((tournament, team))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_team_with_dependencies(
    db: &DatabaseConnection,
) -> Result<(entity::tournament::Model, entity::team::Model), DbErr> {
    let tournament = crate::factory::tournament::create_tournament(db).await?;
    let team = crate::factory::team::create_team(db, tournament.id).await?;

    Ok((tournament, team))
}

/// Creates an account owning a team in a fresh tournament.
///
/// The account's password is `crate::factory::account::DEFAULT_PASSWORD`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((account, tournament, team))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_registered_team(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::account::Model,
        entity::tournament::Model,
        entity::team::Model,
    ),
    DbErr,
> {
    let account = crate::factory::account::create_account(db).await?;
    let tournament = crate::factory::tournament::create_tournament(db).await?;
    let team = crate::factory::team::TeamFactory::new(db, tournament.id)
        .account_id(Some(account.id))
        .build()
        .await?;

    Ok((account, tournament, team))
}

/// Creates two ungrouped teams in one tournament, ready to play each other.
///
/// # Returns
/// - `Ok((tournament, team1, team2))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_opponents(
    db: &DatabaseConnection,
    group: Option<&str>,
) -> Result<
    (
        entity::tournament::Model,
        entity::team::Model,
        entity::team::Model,
    ),
    DbErr,
> {
    let tournament = crate::factory::tournament::create_tournament(db).await?;
    let team1 = crate::factory::team::TeamFactory::new(db, tournament.id)
        .group(group)
        .build()
        .await?;
    let team2 = crate::factory::team::TeamFactory::new(db, tournament.id)
        .group(group)
        .build()
        .await?;

    Ok((tournament, team1, team2))
}
