use super::*;

/// Tests listing a team's matches on both sides.
///
/// Verifies that matches where the team is home or away are returned,
/// latest first, and matches between other teams are not.
///
/// Expected: Ok with both of the team's matches
#[tokio::test]
async fn returns_home_and_away_matches() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tournament_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (tournament, team, rival) = factory::helpers::create_opponents(db, Some("A")).await?;
    let third = factory::create_team(db, tournament.id).await?;
    let now = Utc::now();

    let home = factory::game_match::MatchFactory::new(db, team.id, rival.id)
        .played_at(now - Duration::days(2))
        .build()
        .await?;
    let away = factory::game_match::MatchFactory::new(db, third.id, team.id)
        .played_at(now - Duration::days(1))
        .build()
        .await?;
    factory::create_match(db, rival.id, third.id).await?;

    let repo = GameMatchRepository::new(db);
    let ids: Vec<i32> = repo
        .get_for_team(team.id)
        .await?
        .into_iter()
        .map(|m| m.id)
        .collect();

    assert_eq!(ids, vec![away.id, home.id]);

    Ok(())
}
