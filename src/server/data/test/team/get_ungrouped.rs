use super::*;

/// Tests finding teams without a group label.
///
/// Verifies that both NULL and empty labels count as ungrouped.
///
/// Expected: Ok with the two ungrouped teams
#[tokio::test]
async fn treats_null_and_empty_as_ungrouped() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tournament_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tournament = factory::create_tournament(db).await?;
    let no_group = factory::team::TeamFactory::new(db, tournament.id)
        .name("Alpha")
        .build()
        .await?;
    let empty_group = factory::team::TeamFactory::new(db, tournament.id)
        .name("Bravo")
        .group(Some(""))
        .build()
        .await?;
    factory::team::TeamFactory::new(db, tournament.id)
        .name("Charlie")
        .group(Some("A"))
        .build()
        .await?;

    let repo = TeamRepository::new(db);
    let ids: Vec<i32> = repo
        .get_ungrouped(tournament.id)
        .await?
        .into_iter()
        .map(|t| t.id)
        .collect();

    assert_eq!(ids, vec![no_group.id, empty_group.id]);

    Ok(())
}
