//! Account domain models.
//!
//! An account is the credential behind either a team login or an admin login.

use chrono::{DateTime, Utc};

use crate::model::auth::AccountDto;

#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    pub id: i32,
    pub username: String,
    /// Argon2 PHC hash, never sent over the wire.
    pub password_hash: String,
    pub is_staff: bool,
    pub is_superuser: bool,
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Staff and superusers may use every admin endpoint.
    pub fn is_admin(&self) -> bool {
        self.is_staff || self.is_superuser
    }

    pub fn into_dto(self) -> AccountDto {
        AccountDto {
            id: self.id,
            username: self.username,
            is_staff: self.is_staff,
            is_superuser: self.is_superuser,
        }
    }

    pub fn from_entity(entity: entity::account::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            password_hash: entity.password_hash,
            is_staff: entity.is_staff,
            is_superuser: entity.is_superuser,
            created_at: entity.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateAccountParams {
    pub username: String,
    pub password_hash: String,
    pub is_staff: bool,
    pub is_superuser: bool,
}
