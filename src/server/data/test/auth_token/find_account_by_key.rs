use super::*;

/// Tests resolving a valid key to its account.
///
/// Expected: Ok(Some(account))
#[tokio::test]
async fn resolves_account() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let account = factory::create_account(db).await?;

    let repo = AuthTokenRepository::new(db);
    let key = repo.get_or_create(account.id).await?;
    let found = repo.find_account_by_key(&key).await?;

    assert_eq!(found.map(|a| a.id), Some(account.id));

    Ok(())
}

/// Tests resolving a key that was never issued.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_key() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AuthTokenRepository::new(db);

    assert!(repo.find_account_by_key("not-a-token").await?.is_none());

    Ok(())
}
