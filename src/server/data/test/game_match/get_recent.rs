use super::*;

/// Tests limiting the list to the most recently played matches.
///
/// Expected: Ok with `limit` matches, latest first
#[tokio::test]
async fn returns_latest_matches() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tournament_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_tournament, team1, team2) = factory::helpers::create_opponents(db, None).await?;
    let now = Utc::now();

    let mut created = Vec::new();
    for days_ago in 0..5 {
        let game = factory::game_match::MatchFactory::new(db, team1.id, team2.id)
            .played_at(now - Duration::days(days_ago))
            .build()
            .await?;
        created.push(game.id);
    }

    let repo = GameMatchRepository::new(db);
    let recent: Vec<i32> = repo
        .get_recent(3)
        .await?
        .into_iter()
        .map(|m| m.id)
        .collect();

    assert_eq!(recent, created[..3].to_vec());

    Ok(())
}
