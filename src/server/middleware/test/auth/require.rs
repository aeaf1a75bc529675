use super::*;

/// Tests a staff account passing the admin check.
///
/// Expected: Ok(Account)
#[tokio::test]
async fn grants_access_to_staff() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let staff = factory::account::AccountFactory::new(db)
        .staff(true)
        .build()
        .await?;
    let key = AuthTokenRepository::new(db).get_or_create(staff.id).await?;
    let headers = auth_headers(&format!("Bearer {}", key));

    let account = AuthGuard::new(db, &headers)
        .require(&[Permission::Admin])
        .await?;

    assert_eq!(account.id, staff.id);

    Ok(())
}

/// Tests a team account failing the admin check.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_non_staff_account() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let account = factory::create_account(db).await?;
    let key = AuthTokenRepository::new(db).get_or_create(account.id).await?;
    let headers = auth_headers(&format!("Token {}", key));

    let result = AuthGuard::new(db, &headers)
        .require(&[Permission::Admin])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(id, _))) if id == account.id
    ));

    Ok(())
}

/// Tests requests without a token.
///
/// Expected: Err(AuthError::MissingToken)
#[tokio::test]
async fn rejects_missing_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let headers = HeaderMap::new();
    let result = AuthGuard::new(db, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    Ok(())
}

/// Tests requests with a key that was never issued.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn rejects_unknown_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let headers = auth_headers("Bearer not-a-real-token");
    let result = AuthGuard::new(db, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken))
    ));

    Ok(())
}
