use super::*;

/// Tests creating a new account.
///
/// Verifies that the repository stores the username, hash and privilege flags
/// exactly as given.
///
/// Expected: Ok with the stored account
#[tokio::test]
async fn creates_account() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AccountRepository::new(db);
    let account = repo
        .create(CreateAccountParams {
            username: "los_pumas".to_string(),
            password_hash: "hash".to_string(),
            is_staff: false,
            is_superuser: false,
        })
        .await?;

    assert_eq!(account.username, "los_pumas");
    assert_eq!(account.password_hash, "hash");
    assert!(!account.is_admin());

    Ok(())
}

/// Tests that usernames are unique.
///
/// Verifies that inserting a second account with an existing username fails
/// at the database level.
///
/// Expected: Err
#[tokio::test]
async fn rejects_duplicate_username() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_account(db).await?;

    let repo = AccountRepository::new(db);
    let result = repo
        .create(CreateAccountParams {
            username: existing.username,
            password_hash: "hash".to_string(),
            is_staff: false,
            is_superuser: false,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
