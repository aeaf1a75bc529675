use super::*;

/// Tests loading tournament name and phone number for teams.
///
/// Verifies that the first participant with a phone number supplies the
/// team's contact number and teams without one get `None`.
///
/// Expected: Ok with details for every team in input order
#[tokio::test]
async fn attaches_tournament_and_phone() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tournament_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (tournament, team1, team2) = factory::helpers::create_opponents(db, None).await?;
    factory::participant::ParticipantFactory::new(db, team1.id)
        .build()
        .await?;
    factory::participant::ParticipantFactory::new(db, team1.id)
        .phone_number(Some("555-0101"))
        .build()
        .await?;
    factory::participant::ParticipantFactory::new(db, team1.id)
        .phone_number(Some("555-0202"))
        .build()
        .await?;

    let repo = TeamRepository::new(db);
    let details = repo
        .with_details(vec![Team::from_entity(team1), Team::from_entity(team2)])
        .await?;

    assert_eq!(details.len(), 2);
    assert_eq!(details[0].tournament_name, tournament.name);
    assert_eq!(details[0].phone_number.as_deref(), Some("555-0101"));
    assert_eq!(details[1].phone_number, None);

    Ok(())
}
