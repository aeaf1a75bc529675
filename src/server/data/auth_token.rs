//! API token repository.
//!
//! Each account holds at most one token. Logging in reuses the existing token and
//! logging out deletes it.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

use crate::server::{model::account::Account, util::token::generate_token};

pub struct AuthTokenRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AuthTokenRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Returns the account's token key, issuing a new one if it has none.
    ///
    /// # Returns
    /// - `Ok(String)` - Token key for the account
    /// - `Err(DbErr)` - Database error during lookup or insert
    pub async fn get_or_create(&self, account_id: i32) -> Result<String, DbErr> {
        let existing = entity::prelude::AuthToken::find()
            .filter(entity::auth_token::Column::AccountId.eq(account_id))
            .one(self.db)
            .await?;

        if let Some(token) = existing {
            return Ok(token.key);
        }

        let token = entity::auth_token::ActiveModel {
            key: ActiveValue::Set(generate_token()),
            account_id: ActiveValue::Set(account_id),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(token.key)
    }

    /// Resolves a token key to the account that owns it.
    ///
    /// # Returns
    /// - `Ok(Some(Account))` - Token is valid
    /// - `Ok(None)` - No such token
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_account_by_key(&self, key: &str) -> Result<Option<Account>, DbErr> {
        let result = entity::prelude::AuthToken::find_by_id(key.to_string())
            .find_also_related(entity::prelude::Account)
            .one(self.db)
            .await?;

        Ok(result.and_then(|(_, account)| account.map(Account::from_entity)))
    }

    /// Deletes the account's token, if any.
    ///
    /// # Returns
    /// - `Ok(true)` - A token was deleted
    /// - `Ok(false)` - The account had no token
    pub async fn delete_by_account(&self, account_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::AuthToken::delete_many()
            .filter(entity::auth_token::Column::AccountId.eq(account_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
