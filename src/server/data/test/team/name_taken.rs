use super::*;

/// Tests that team names are scoped to their tournament.
///
/// Verifies that a name used in one tournament is reported as taken there
/// and free in another tournament.
///
/// Expected: Ok(true) in the same tournament, Ok(false) elsewhere
#[tokio::test]
async fn scopes_names_per_tournament() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tournament_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_tournament(db).await?;
    let second = factory::create_tournament(db).await?;
    factory::team::TeamFactory::new(db, first.id)
        .name("Los Pumas")
        .build()
        .await?;

    let repo = TeamRepository::new(db);

    assert!(repo.name_taken("Los Pumas", first.id, None).await?);
    assert!(!repo.name_taken("Los Pumas", second.id, None).await?);

    Ok(())
}

/// Tests that a team does not clash with its own name.
///
/// Expected: Ok(false) when the team itself is excluded
#[tokio::test]
async fn excludes_given_team() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tournament_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (tournament, team) = factory::helpers::create_team_with_dependencies(db).await?;

    let repo = TeamRepository::new(db);

    assert!(!repo.name_taken(&team.name, tournament.id, Some(team.id)).await?);

    Ok(())
}
