use axum::http::{header::AUTHORIZATION, HeaderMap};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{auth_token::AuthTokenRepository, team::TeamRepository},
    error::{auth::AuthError, AppError},
    model::{account::Account, team::Team},
};

/// Authorization schemes accepted in front of the token key.
const TOKEN_SCHEMES: [&str; 2] = ["Bearer", "Token"];

pub enum Permission {
    /// Staff or superuser account.
    Admin,
}

/// Resolves the request's token to an account and checks its permissions.
///
/// Handlers build a guard first and bail out with its error before doing any work.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, headers: &'a HeaderMap) -> Self {
        Self { db, headers }
    }

    /// Authenticates the request and checks every listed permission.
    ///
    /// # Returns
    /// - `Ok(Account)` - Token is valid and all permissions are held
    /// - `Err(AuthError::MissingToken)` - No usable Authorization header
    /// - `Err(AuthError::InvalidToken)` - Token does not belong to any account
    /// - `Err(AuthError::AccessDenied)` - A permission is not held
    pub async fn require(&self, permissions: &[Permission]) -> Result<Account, AppError> {
        let Some(key) = bearer_token(self.headers) else {
            return Err(AuthError::MissingToken.into());
        };

        let Some(account) = AuthTokenRepository::new(self.db)
            .find_account_by_key(key)
            .await?
        else {
            return Err(AuthError::InvalidToken.into());
        };

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !account.is_admin() {
                        return Err(AuthError::AccessDenied(
                            account.id,
                            "Account attempted to use an admin endpoint without staff permissions"
                                .to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(account)
    }

    /// Authenticates the request and loads the team the account logs in for.
    ///
    /// # Returns
    /// - `Ok((Account, Team))` - Authenticated team account
    /// - `Err(AuthError::NoTeam)` - Account is valid but owns no team
    pub async fn require_team(&self) -> Result<(Account, Team), AppError> {
        let account = self.require(&[]).await?;

        let Some(team) = TeamRepository::new(self.db)
            .find_by_account_id(account.id)
            .await?
        else {
            return Err(AuthError::NoTeam(account.id).into());
        };

        Ok((account, team))
    }
}

/// Extracts the token key from an `Authorization: Bearer <key>` or `Token <key>` header.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, key) = value.trim().split_once(' ')?;

    if !TOKEN_SCHEMES
        .iter()
        .any(|s| s.eq_ignore_ascii_case(scheme))
    {
        return None;
    }

    let key = key.trim();
    (!key.is_empty()).then_some(key)
}
