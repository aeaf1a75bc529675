use super::*;

/// Tests assigning a group to a team of the tournament.
///
/// Expected: Ok(Some) with the new label
#[tokio::test]
async fn sets_group() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tournament_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (tournament, team) = factory::helpers::create_team_with_dependencies(db).await?;

    let repo = TeamRepository::new(db);
    let updated = repo
        .set_group(team.id, tournament.id, Some("B".to_string()))
        .await?;

    assert_eq!(updated.and_then(|t| t.group).as_deref(), Some("B"));

    Ok(())
}

/// Tests assigning a group through the wrong tournament.
///
/// Verifies that a team cannot be regrouped via a tournament it does not
/// belong to.
///
/// Expected: Ok(None) and the team unchanged
#[tokio::test]
async fn ignores_team_from_other_tournament() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tournament_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_tournament, team) = factory::helpers::create_team_with_dependencies(db).await?;
    let other = factory::create_tournament(db).await?;

    let repo = TeamRepository::new(db);
    let result = repo
        .set_group(team.id, other.id, Some("B".to_string()))
        .await?;

    assert!(result.is_none());
    assert!(repo.find_by_id(team.id).await?.unwrap().group.is_none());

    Ok(())
}
