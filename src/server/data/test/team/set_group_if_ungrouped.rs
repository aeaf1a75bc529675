use super::*;

/// Tests drawing a group for a team without one.
///
/// Expected: Ok(Some) with the new label
#[tokio::test]
async fn sets_group_of_ungrouped_team() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tournament_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (tournament, team) = factory::helpers::create_team_with_dependencies(db).await?;

    let updated = TeamRepository::new(db)
        .set_group_if_ungrouped(team.id, tournament.id, "C".to_string())
        .await?;

    assert_eq!(updated.and_then(|t| t.group).as_deref(), Some("C"));

    Ok(())
}

/// Tests that a team with a group keeps it.
///
/// Verifies both a real label and the empty label, which counts as no group.
///
/// Expected: Ok(None) for the grouped team, Ok(Some) for the empty label
#[tokio::test]
async fn keeps_existing_group() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tournament_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tournament = factory::create_tournament(db).await?;
    let grouped = factory::team::TeamFactory::new(db, tournament.id)
        .group(Some("Z"))
        .build()
        .await?;
    let blank = factory::team::TeamFactory::new(db, tournament.id)
        .group(Some(""))
        .build()
        .await?;

    let repo = TeamRepository::new(db);
    let skipped = repo
        .set_group_if_ungrouped(grouped.id, tournament.id, "C".to_string())
        .await?;
    let drawn = repo
        .set_group_if_ungrouped(blank.id, tournament.id, "C".to_string())
        .await?;

    assert!(skipped.is_none());
    assert_eq!(
        repo.find_by_id(grouped.id).await?.unwrap().group.as_deref(),
        Some("Z")
    );
    assert_eq!(drawn.and_then(|t| t.group).as_deref(), Some("C"));

    Ok(())
}
