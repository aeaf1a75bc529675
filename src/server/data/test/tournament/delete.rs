use super::*;
use sea_orm::{EntityTrait, PaginatorTrait};

/// Tests that deleting a tournament removes its teams.
///
/// Expected: Ok(true) and no teams left
#[tokio::test]
async fn cascades_to_teams() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tournament_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (tournament, _team) = factory::helpers::create_team_with_dependencies(db).await?;

    let repo = TournamentRepository::new(db);

    assert!(repo.delete(tournament.id).await?);
    assert_eq!(entity::prelude::Team::find().count(db).await?, 0);
    assert!(!repo.delete(tournament.id).await?);

    Ok(())
}
