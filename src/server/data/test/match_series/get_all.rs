use super::*;

/// Tests filtering series on the active flag.
///
/// Expected: Ok with one series per flag and both without a filter
#[tokio::test]
async fn filters_on_active_flag() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let active = factory::match_series::MatchSeriesFactory::new(db)
        .active(true)
        .build()
        .await?;
    let inactive = factory::match_series::MatchSeriesFactory::new(db)
        .active(false)
        .build()
        .await?;

    let repo = MatchSeriesRepository::new(db);

    let only_active = repo.get_all(Some(true)).await?;
    assert_eq!(only_active.len(), 1);
    assert_eq!(only_active[0].id, active.id);

    let only_inactive = repo.get_all(Some(false)).await?;
    assert_eq!(only_inactive.len(), 1);
    assert_eq!(only_inactive[0].id, inactive.id);

    assert_eq!(repo.get_all(None).await?.len(), 2);

    Ok(())
}
