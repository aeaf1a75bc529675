use super::*;

/// Tests issuing a token for an account without one.
///
/// Expected: Ok with a new alphanumeric key of the standard length
#[tokio::test]
async fn issues_new_token() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let account = factory::create_account(db).await?;

    let repo = AuthTokenRepository::new(db);
    let key = repo.get_or_create(account.id).await?;

    assert_eq!(key.len(), TOKEN_LENGTH);
    assert!(key.chars().all(|c| c.is_ascii_alphanumeric()));

    Ok(())
}

/// Tests that a second login reuses the account's token.
///
/// Verifies that repeated calls return the same key and never store more
/// than one token per account.
///
/// Expected: Ok with identical keys and a single row
#[tokio::test]
async fn reuses_existing_token() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let account = factory::create_account(db).await?;

    let repo = AuthTokenRepository::new(db);
    let first = repo.get_or_create(account.id).await?;
    let second = repo.get_or_create(account.id).await?;

    assert_eq!(first, second);
    assert_eq!(entity::prelude::AuthToken::find().count(db).await?, 1);

    Ok(())
}
