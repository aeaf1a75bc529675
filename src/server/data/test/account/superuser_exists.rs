use super::*;

/// Tests detecting an existing superuser.
///
/// Expected: Ok(true)
#[tokio::test]
async fn returns_true_when_superuser_exists() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::account::AccountFactory::new(db)
        .superuser(true)
        .build()
        .await?;

    let repo = AccountRepository::new(db);

    assert!(repo.superuser_exists().await?);

    Ok(())
}

/// Tests that staff accounts do not count as superusers.
///
/// Verifies that startup would still bootstrap a superuser when only staff
/// accounts exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn ignores_staff_accounts() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::account::AccountFactory::new(db)
        .staff(true)
        .build()
        .await?;
    factory::create_account(db).await?;

    let repo = AccountRepository::new(db);

    assert!(!repo.superuser_exists().await?);

    Ok(())
}
