use super::*;

/// Tests that logging out invalidates the key.
///
/// Expected: Ok(true), then the key no longer resolves
#[tokio::test]
async fn deletes_token() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let account = factory::create_account(db).await?;

    let repo = AuthTokenRepository::new(db);
    let key = repo.get_or_create(account.id).await?;

    assert!(repo.delete_by_account(account.id).await?);
    assert!(repo.find_account_by_key(&key).await?.is_none());

    Ok(())
}

/// Tests deleting when the account holds no token.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_without_token() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let account = factory::create_account(db).await?;

    let repo = AuthTokenRepository::new(db);

    assert!(!repo.delete_by_account(account.id).await?);

    Ok(())
}
