use super::*;

/// Tests resolving a team account to its team.
///
/// Expected: Ok((Account, Team))
#[tokio::test]
async fn returns_callers_team() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_tournament_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (account, _tournament, team) = factory::helpers::create_registered_team(db).await?;
    let key = AuthTokenRepository::new(db).get_or_create(account.id).await?;
    let headers = auth_headers(&format!("Bearer {}", key));

    let (found_account, found_team) = AuthGuard::new(db, &headers).require_team().await?;

    assert_eq!(found_account.id, account.id);
    assert_eq!(found_team.id, team.id);

    Ok(())
}

/// Tests an authenticated account that owns no team.
///
/// Expected: Err(AuthError::NoTeam)
#[tokio::test]
async fn rejects_account_without_team() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_tournament_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let account = factory::create_account(db).await?;
    let key = AuthTokenRepository::new(db).get_or_create(account.id).await?;
    let headers = auth_headers(&format!("Bearer {}", key));

    let result = AuthGuard::new(db, &headers).require_team().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::NoTeam(_)))
    ));

    Ok(())
}
