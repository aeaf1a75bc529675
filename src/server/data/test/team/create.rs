use super::*;
use crate::server::{error::AppError, model::team::CreateTeamParams};
use sea_orm::SqlErr;

fn params(tournament_id: i32, name: &str) -> CreateTeamParams {
    CreateTeamParams {
        account_id: None,
        tournament_id,
        name: name.to_string(),
        group: None,
    }
}

/// Tests inserting a second team with a name already used in the tournament.
///
/// Verifies that the unique key on name and tournament rejects the insert even
/// without a prior name check, and that the error becomes a conflict.
///
/// Expected: Err with a unique constraint violation, mapped to AppError::Conflict
#[tokio::test]
async fn rejects_duplicate_name_in_tournament() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tournament_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tournament = factory::create_tournament(db).await?;

    let repo = TeamRepository::new(db);
    repo.create(params(tournament.id, "Los Pumas")).await?;

    let err = repo
        .create(params(tournament.id, "Los Pumas"))
        .await
        .unwrap_err();

    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));
    assert!(matches!(
        AppError::conflict_on_duplicate(err, "Duplicate"),
        AppError::Conflict(_)
    ));

    Ok(())
}

/// Tests reusing a team name in another tournament.
///
/// Expected: Ok for both teams
#[tokio::test]
async fn allows_same_name_in_other_tournament() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tournament_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_tournament(db).await?;
    let second = factory::create_tournament(db).await?;

    let repo = TeamRepository::new(db);
    repo.create(params(first.id, "Los Pumas")).await?;
    repo.create(params(second.id, "Los Pumas")).await?;

    assert_eq!(repo.find_by_name("Los Pumas").await?.len(), 2);

    Ok(())
}
