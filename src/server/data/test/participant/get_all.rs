use super::*;

/// Tests listing only active participants.
///
/// Expected: Ok with the active participant only, and both without the filter
#[tokio::test]
async fn filters_inactive_participants() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tournament_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_tournament, team) = factory::helpers::create_team_with_dependencies(db).await?;
    let active = factory::participant::ParticipantFactory::new(db, team.id)
        .name("Ana")
        .build()
        .await?;
    factory::participant::ParticipantFactory::new(db, team.id)
        .name("Bruno")
        .active(false)
        .build()
        .await?;

    let repo = ParticipantRepository::new(db);

    let only_active = repo.get_all(true).await?;
    assert_eq!(only_active.len(), 1);
    assert_eq!(only_active[0].id, active.id);

    let everyone = repo.with_details(repo.get_all(false).await?).await?;
    assert_eq!(everyone.len(), 2);
    assert_eq!(everyone[0].participant.name, "Ana");
    assert_eq!(everyone[0].team_name, team.name);

    Ok(())
}
