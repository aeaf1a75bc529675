use super::*;

/// Tests applying a win to a team with no classification yet.
///
/// Expected: Ok with one game played, one win and three points
#[tokio::test]
async fn creates_row_on_first_result() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tournament_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_tournament, team) = factory::helpers::create_team_with_dependencies(db).await?;

    let repo = ClassificationRepository::new(db);
    let row = repo
        .apply_delta(team.id, &ResultDelta::from_score(3, 1))
        .await?;

    assert_eq!(row.games_played, 1);
    assert_eq!(row.games_won, 1);
    assert_eq!(row.games_lost, 0);
    assert_eq!(row.points, 3);
    assert_eq!(row.goals_for, 3);
    assert_eq!(row.goals_against, 1);

    Ok(())
}

/// Tests that results accumulate on top of stored counters.
///
/// Verifies that the increment is applied relative to the stored row, not
/// to a stale copy.
///
/// Expected: Ok with counters summed over both results
#[tokio::test]
async fn accumulates_results() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tournament_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_tournament, team) = factory::helpers::create_team_with_dependencies(db).await?;
    factory::classification::ClassificationFactory::new(db, team.id)
        .points(3)
        .games_played(1)
        .games_won(1)
        .goals_for(2)
        .build()
        .await?;

    let repo = ClassificationRepository::new(db);
    repo.apply_delta(team.id, &ResultDelta::from_score(2, 2))
        .await?;
    let row = repo
        .apply_delta(team.id, &ResultDelta::from_score(0, 1))
        .await?;

    assert_eq!(row.games_played, 3);
    assert_eq!(row.games_won, 1);
    assert_eq!(row.games_lost, 1);
    assert_eq!(row.points, 4);
    assert_eq!(row.goals_for, 4);
    assert_eq!(row.goals_against, 3);
    assert_eq!(row.goal_difference(), 1);

    Ok(())
}
