use super::*;

/// Tests detecting a tournament name already in use.
///
/// Expected: Ok(true) for the used name, Ok(false) when the owner is excluded
#[tokio::test]
async fn detects_used_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tournament_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tournament = factory::tournament::TournamentFactory::new(db)
        .name("Summer Cup")
        .build()
        .await?;

    let repo = TournamentRepository::new(db);

    assert!(repo.name_taken("Summer Cup", None).await?);
    assert!(!repo.name_taken("Summer Cup", Some(tournament.id)).await?);
    assert!(!repo.name_taken("Winter Cup", None).await?);

    Ok(())
}
