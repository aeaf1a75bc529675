use super::*;
use crate::server::model::game_match::MatchParams;

/// Tests replacing the fields of an unfinished match.
///
/// Expected: Ok(true) and the stored match carries the new score and flag
#[tokio::test]
async fn updates_unfinished_match() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tournament_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_tournament, team1, team2) = factory::helpers::create_opponents(db, None).await?;
    let game = factory::game_match::MatchFactory::new(db, team1.id, team2.id)
        .finished(false)
        .build()
        .await?;

    let repo = GameMatchRepository::new(db);
    let updated = repo
        .update_if_unfinished(game.id, MatchParams::finished(team1.id, team2.id, 4, 0))
        .await?;

    assert!(updated);
    let stored = repo.find_by_id(game.id).await?.unwrap();
    assert_eq!((stored.goals1, stored.goals2), (4, 0));
    assert!(stored.is_finished);

    Ok(())
}

/// Tests that a finished match is left untouched.
///
/// Expected: Ok(false) on the second write and the first score kept
#[tokio::test]
async fn skips_finished_match() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tournament_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_tournament, team1, team2) = factory::helpers::create_opponents(db, None).await?;
    let game = factory::game_match::MatchFactory::new(db, team1.id, team2.id)
        .finished(false)
        .build()
        .await?;

    let repo = GameMatchRepository::new(db);
    assert!(
        repo.update_if_unfinished(game.id, MatchParams::finished(team1.id, team2.id, 1, 0))
            .await?
    );
    assert!(
        !repo
            .update_if_unfinished(game.id, MatchParams::finished(team1.id, team2.id, 0, 3))
            .await?
    );
    assert!(
        !repo
            .update_if_unfinished(9999, MatchParams::finished(team1.id, team2.id, 0, 3))
            .await?
    );

    let stored = repo.find_by_id(game.id).await?.unwrap();
    assert_eq!((stored.goals1, stored.goals2), (1, 0));

    Ok(())
}
