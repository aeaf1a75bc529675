//! Team factory for creating test team entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test teams with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let team = TeamFactory::new(&db, tournament.id)
///     .name("Los Pumas")
///     .group(Some("A"))
///     .account_id(Some(account.id))
///     .build()
///     .await?;
/// ```
pub struct TeamFactory<'a> {
    db: &'a DatabaseConnection,
    tournament_id: i32,
    account_id: Option<i32>,
    name: String,
    group: Option<String>,
}

impl<'a> TeamFactory<'a> {
    /// Creates a new TeamFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Team {id}"`
    /// - group: `None`
    /// - account_id: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `tournament_id` - Tournament the team plays in
    pub fn new(db: &'a DatabaseConnection, tournament_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            tournament_id,
            account_id: None,
            name: format!("Team {}", id),
            group: None,
        }
    }

    /// Sets the team name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the group label.
    pub fn group(mut self, group: Option<&str>) -> Self {
        self.group = group.map(str::to_string);
        self
    }

    /// Sets the owning account.
    pub fn account_id(mut self, account_id: Option<i32>) -> Self {
        self.account_id = account_id;
        self
    }

    /// Builds and inserts the team entity into the database.
    pub async fn build(self) -> Result<entity::team::Model, DbErr> {
        entity::team::ActiveModel {
            id: ActiveValue::NotSet,
            account_id: ActiveValue::Set(self.account_id),
            tournament_id: ActiveValue::Set(self.tournament_id),
            name: ActiveValue::Set(self.name),
            group: ActiveValue::Set(self.group),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an ungrouped team without an owning account.
pub async fn create_team(
    db: &DatabaseConnection,
    tournament_id: i32,
) -> Result<entity::team::Model, DbErr> {
    TeamFactory::new(db, tournament_id).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use crate::factory::tournament::create_tournament;

    #[tokio::test]
    async fn creates_team_with_custom_values() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_tournament_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let tournament = create_tournament(db).await?;
        let team = TeamFactory::new(db, tournament.id)
            .name("Los Pumas")
            .group(Some("B"))
            .build()
            .await?;

        assert_eq!(team.name, "Los Pumas");
        assert_eq!(team.group.as_deref(), Some("B"));
        assert_eq!(team.tournament_id, tournament.id);
        assert!(team.account_id.is_none());

        Ok(())
    }
}
