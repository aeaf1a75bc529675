use super::*;

/// Tests replacing a tournament's fields.
///
/// Expected: Ok(Some) with the new values
#[tokio::test]
async fn updates_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tournament_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tournament = factory::create_tournament(db).await?;

    let repo = TournamentRepository::new(db);
    let updated = repo
        .update(
            tournament.id,
            TournamentParams {
                name: "Renamed Cup".to_string(),
                start_date: date(5, 1),
                estimated_end_date: date(5, 31),
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.name, "Renamed Cup");
    assert_eq!(updated.start_date, date(5, 1));
    assert_eq!(updated.estimated_end_date, date(5, 31));

    Ok(())
}

/// Tests updating a tournament that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_tournament() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tournament_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TournamentRepository::new(db);
    let result = repo
        .update(
            999,
            TournamentParams {
                name: "Ghost Cup".to_string(),
                start_date: date(1, 1),
                estimated_end_date: date(1, 2),
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}
