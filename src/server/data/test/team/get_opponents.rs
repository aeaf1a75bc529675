use super::*;

/// Tests listing opponents in the same tournament and group.
///
/// Verifies that teams from another group, another tournament, and the
/// team itself are all excluded.
///
/// Expected: Ok with only the same-group rival
#[tokio::test]
async fn lists_same_group_teams() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tournament_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (tournament, team, rival) = factory::helpers::create_opponents(db, Some("A")).await?;
    factory::team::TeamFactory::new(db, tournament.id)
        .group(Some("B"))
        .build()
        .await?;
    let other = factory::create_tournament(db).await?;
    factory::team::TeamFactory::new(db, other.id)
        .group(Some("A"))
        .build()
        .await?;

    let repo = TeamRepository::new(db);
    let opponents = repo.get_opponents(&Team::from_entity(team)).await?;

    assert_eq!(opponents.len(), 1);
    assert_eq!(opponents[0].id, rival.id);

    Ok(())
}

/// Tests that an ungrouped team has no opponents.
///
/// Expected: Ok(empty)
#[tokio::test]
async fn ungrouped_team_has_no_opponents() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tournament_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_tournament, team, _rival) = factory::helpers::create_opponents(db, None).await?;

    let repo = TeamRepository::new(db);
    let opponents = repo.get_opponents(&Team::from_entity(team)).await?;

    assert!(opponents.is_empty());

    Ok(())
}
