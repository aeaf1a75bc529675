use super::*;

/// Tests linking and unlinking matches.
///
/// Verifies that linking is idempotent and that removing a link only
/// affects the series membership.
///
/// Expected: Ok with the expected link flags and membership
#[tokio::test]
async fn links_and_unlinks_matches() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_tournament, team1, team2) = factory::helpers::create_opponents(db, None).await?;
    let game = factory::create_match(db, team1.id, team2.id).await?;
    let series = factory::create_match_series(db).await?;

    let repo = MatchSeriesRepository::new(db);

    assert!(repo.add_match(series.id, game.id).await?);
    assert!(!repo.add_match(series.id, game.id).await?);
    assert_eq!(repo.get_match_ids(series.id).await?, vec![game.id]);

    assert!(repo.remove_match(series.id, game.id).await?);
    assert!(!repo.remove_match(series.id, game.id).await?);
    assert!(repo.get_match_ids(series.id).await?.is_empty());

    Ok(())
}
