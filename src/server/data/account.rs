//! Account data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

use crate::server::model::account::{Account, CreateAccountParams};

/// Repository providing database operations for accounts.
pub struct AccountRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AccountRepository<'a, C> {
    /// Creates a new AccountRepository instance.
    ///
    /// # Arguments
    /// - `db` - Connection or transaction to run queries on
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new account.
    ///
    /// # Returns
    /// - `Ok(Account)` - The created account
    /// - `Err(DbErr)` - Database error, including a username that is already taken
    pub async fn create(&self, params: CreateAccountParams) -> Result<Account, DbErr> {
        let entity = entity::account::ActiveModel {
            id: ActiveValue::NotSet,
            username: ActiveValue::Set(params.username),
            password_hash: ActiveValue::Set(params.password_hash),
            is_staff: ActiveValue::Set(params.is_staff),
            is_superuser: ActiveValue::Set(params.is_superuser),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(Account::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Account>, DbErr> {
        let entity = entity::prelude::Account::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Account::from_entity))
    }

    pub async fn find_by_username(&self, username: &str) -> Result<Option<Account>, DbErr> {
        let entity = entity::prelude::Account::find()
            .filter(entity::account::Column::Username.eq(username))
            .one(self.db)
            .await?;

        Ok(entity.map(Account::from_entity))
    }

    pub async fn username_exists(&self, username: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Account::find()
            .filter(entity::account::Column::Username.eq(username))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks whether at least one superuser account exists.
    ///
    /// Used on startup to decide whether the configured superuser must be created.
    pub async fn superuser_exists(&self) -> Result<bool, DbErr> {
        let count = entity::prelude::Account::find()
            .filter(entity::account::Column::IsSuperuser.eq(true))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
