use super::*;

/// Tests the standings table order.
///
/// Verifies that rows are ordered by points, with goals scored breaking
/// ties, and that team names are attached.
///
/// Expected: Ok with rows in table order
#[tokio::test]
async fn orders_by_points_then_goals_for() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tournament_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tournament = factory::create_tournament(db).await?;
    let low = factory::team::TeamFactory::new(db, tournament.id)
        .name("Low")
        .build()
        .await?;
    let tied_few_goals = factory::create_team(db, tournament.id).await?;
    let tied_many_goals = factory::create_team(db, tournament.id).await?;

    factory::classification::ClassificationFactory::new(db, low.id)
        .points(1)
        .build()
        .await?;
    factory::classification::ClassificationFactory::new(db, tied_few_goals.id)
        .points(6)
        .goals_for(2)
        .build()
        .await?;
    factory::classification::ClassificationFactory::new(db, tied_many_goals.id)
        .points(6)
        .goals_for(5)
        .build()
        .await?;

    let repo = ClassificationRepository::new(db);
    let table = repo.get_table(None, Some(tournament.id)).await?;
    let team_ids: Vec<i32> = table.iter().map(|r| r.classification.team_id).collect();

    assert_eq!(team_ids, vec![tied_many_goals.id, tied_few_goals.id, low.id]);
    assert_eq!(table[2].team_name, "Low");

    Ok(())
}

/// Tests filtering the table by group and tournament.
///
/// Expected: Ok with only rows of teams in the requested group and tournament
#[tokio::test]
async fn filters_by_group_and_tournament() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tournament_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (tournament, team_a, _other_a) = factory::helpers::create_opponents(db, Some("A")).await?;
    let team_b = factory::team::TeamFactory::new(db, tournament.id)
        .group(Some("B"))
        .build()
        .await?;
    let elsewhere = factory::create_tournament(db).await?;
    let team_elsewhere = factory::team::TeamFactory::new(db, elsewhere.id)
        .group(Some("A"))
        .build()
        .await?;

    for team_id in [team_a.id, team_b.id, team_elsewhere.id] {
        factory::create_classification(db, team_id).await?;
    }

    let repo = ClassificationRepository::new(db);
    let table = repo.get_table(Some("A"), Some(tournament.id)).await?;

    assert_eq!(table.len(), 1);
    assert_eq!(table[0].classification.team_id, team_a.id);

    Ok(())
}
