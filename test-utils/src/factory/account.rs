//! Account factory for creating test account entities.
//!
//! Passwords are hashed with Argon2 exactly as the server stores them, so accounts
//! created here can log in through the real authentication flow.

use crate::factory::helpers::next_id;
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2,
};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Plain-text password given to factory accounts unless overridden.
pub const DEFAULT_PASSWORD: &str = "password123";

/// Factory for creating test accounts with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::account::AccountFactory;
///
/// let admin = AccountFactory::new(&db)
///     .username("admin")
///     .password("hunter2")
///     .staff(true)
///     .build()
///     .await?;
/// ```
pub struct AccountFactory<'a> {
    db: &'a DatabaseConnection,
    username: String,
    password: String,
    is_staff: bool,
    is_superuser: bool,
}

impl<'a> AccountFactory<'a> {
    /// Creates a new AccountFactory with default values.
    ///
    /// Defaults:
    /// - username: `"account_{id}"` where id is auto-incremented
    /// - password: `DEFAULT_PASSWORD`
    /// - is_staff: `false`
    /// - is_superuser: `false`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            username: format!("account_{}", id),
            password: DEFAULT_PASSWORD.to_string(),
            is_staff: false,
            is_superuser: false,
        }
    }

    /// Sets the username for the account.
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    /// Sets the plain-text password, hashed on `build()`.
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    /// Sets the staff flag.
    pub fn staff(mut self, is_staff: bool) -> Self {
        self.is_staff = is_staff;
        self
    }

    /// Sets the superuser flag.
    pub fn superuser(mut self, is_superuser: bool) -> Self {
        self.is_superuser = is_superuser;
        self
    }

    /// Builds and inserts the account entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::account::Model)` - Created account entity
    /// - `Err(DbErr)` - Database error during insert, or the password could not be hashed
    pub async fn build(self) -> Result<entity::account::Model, DbErr> {
        let salt = SaltString::generate(&mut OsRng);
        let password_hash = Argon2::default()
            .hash_password(self.password.as_bytes(), &salt)
            .map_err(|e| DbErr::Custom(e.to_string()))?
            .to_string();

        entity::account::ActiveModel {
            id: ActiveValue::NotSet,
            username: ActiveValue::Set(self.username),
            password_hash: ActiveValue::Set(password_hash),
            is_staff: ActiveValue::Set(self.is_staff),
            is_superuser: ActiveValue::Set(self.is_superuser),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a regular account with default values.
///
/// Shorthand for `AccountFactory::new(db).build().await`.
pub async fn create_account(db: &DatabaseConnection) -> Result<entity::account::Model, DbErr> {
    AccountFactory::new(db).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use argon2::{PasswordHash, PasswordVerifier};
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_account_with_verifiable_password() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_table(Account)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let account = create_account(db).await?;

        let parsed = PasswordHash::new(&account.password_hash).unwrap();
        assert!(Argon2::default()
            .verify_password(DEFAULT_PASSWORD.as_bytes(), &parsed)
            .is_ok());
        assert!(!account.is_staff);
        assert!(!account.is_superuser);

        Ok(())
    }

    #[tokio::test]
    async fn creates_multiple_unique_accounts() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_table(Account)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let first = create_account(db).await?;
        let second = create_account(db).await?;

        assert_ne!(first.id, second.id);
        assert_ne!(first.username, second.username);

        Ok(())
    }
}
