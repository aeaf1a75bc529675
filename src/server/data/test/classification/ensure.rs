use super::*;

/// Tests that a team without a classification gets an all-zero row.
///
/// Expected: Ok with zeroed counters
#[tokio::test]
async fn inserts_default_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tournament_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_tournament, team) = factory::helpers::create_team_with_dependencies(db).await?;

    let repo = ClassificationRepository::new(db);
    let row = repo.ensure(team.id).await?;

    assert_eq!(row.team_id, team.id);
    assert_eq!(row.points, 0);
    assert_eq!(row.games_played, 0);
    assert_eq!(row.position, None);

    Ok(())
}

/// Tests that an existing classification is returned untouched.
///
/// Expected: Ok with the existing row and no second row inserted
#[tokio::test]
async fn returns_existing_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tournament_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_tournament, team) = factory::helpers::create_team_with_dependencies(db).await?;
    let existing = factory::classification::ClassificationFactory::new(db, team.id)
        .points(7)
        .build()
        .await?;

    let repo = ClassificationRepository::new(db);
    let row = repo.ensure(team.id).await?;

    assert_eq!(row.id, existing.id);
    assert_eq!(row.points, 7);
    assert_eq!(entity::prelude::Classification::find().count(db).await?, 1);

    Ok(())
}
