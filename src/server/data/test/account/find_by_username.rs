use super::*;

/// Tests finding an existing account by username.
///
/// Expected: Ok(Some(account))
#[tokio::test]
async fn finds_existing_account() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let account = factory::account::AccountFactory::new(db)
        .username("referee")
        .build()
        .await?;

    let repo = AccountRepository::new(db);
    let found = repo.find_by_username("referee").await?;

    assert_eq!(found.map(|a| a.id), Some(account.id));
    assert!(repo.username_exists("referee").await?);

    Ok(())
}

/// Tests looking up a username nobody has.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_username() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AccountRepository::new(db);

    assert!(repo.find_by_username("nobody").await?.is_none());
    assert!(!repo.username_exists("nobody").await?);

    Ok(())
}
