use super::*;
use crate::server::model::game_match::GameMatch;

/// Tests attaching team names and deriving the winner.
///
/// Expected: Ok with both names set and the winner named in the DTO
#[tokio::test]
async fn attaches_team_names() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tournament_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tournament = factory::create_tournament(db).await?;
    let home = factory::team::TeamFactory::new(db, tournament.id)
        .name("Home")
        .build()
        .await?;
    let away = factory::team::TeamFactory::new(db, tournament.id)
        .name("Away")
        .build()
        .await?;
    let game = factory::game_match::MatchFactory::new(db, home.id, away.id)
        .score(1, 2)
        .finished(true)
        .build()
        .await?;

    let repo = GameMatchRepository::new(db);
    let details = repo
        .with_details(vec![GameMatch::from_entity(game)])
        .await?;
    let dto = details.into_iter().next().unwrap().into_dto();

    assert_eq!(dto.team1_name, "Home");
    assert_eq!(dto.team2_name, "Away");
    assert_eq!(dto.winner_name.as_deref(), Some("Away"));

    Ok(())
}
