use super::*;

/// Tests that the default tournament is the one starting earliest.
///
/// Verifies that creation order does not matter, only the start date.
///
/// Expected: Ok(Some(earliest))
#[tokio::test]
async fn picks_earliest_start_date() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tournament_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::tournament::TournamentFactory::new(db)
        .start_date(date(9, 1))
        .build()
        .await?;
    let earliest = factory::tournament::TournamentFactory::new(db)
        .start_date(date(3, 1))
        .build()
        .await?;
    factory::tournament::TournamentFactory::new(db)
        .start_date(date(6, 1))
        .build()
        .await?;

    let repo = TournamentRepository::new(db);
    let found = repo.find_default().await?;

    assert_eq!(found.map(|t| t.id), Some(earliest.id));

    Ok(())
}

/// Tests the default tournament when none exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_without_tournaments() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tournament_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TournamentRepository::new(db);

    assert!(repo.find_default().await?.is_none());

    Ok(())
}
