use entity::prelude::*;
use sea_orm::{
    sea_query::{IndexCreateStatement, TableCreateStatement},
    EntityTrait, Schema,
};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Tournament, Team};
///
/// let test = TestBuilder::new()
///     .with_table(Tournament)
///     .with_table(Team)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
    /// CREATE INDEX statements for the entities' declared indexes, run after all tables.
    indexes: Vec<IndexCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            indexes: Vec::new(),
        }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables should be added in dependency order (tables with foreign
    /// keys after the tables they reference).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self.indexes.extend(schema.create_index_from_entity(entity));
        self
    }

    /// Adds the account and token tables used by authentication.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_auth_tables(self) -> Self {
        self.with_table(Account).with_table(AuthToken)
    }

    /// Adds every table needed to register teams and record matches.
    ///
    /// Adds, in dependency order: Account, AuthToken, Tournament, Team, Participant,
    /// Classification, GameMatch.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_tournament_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_tournament_tables(self) -> Self {
        self.with_auth_tables()
            .with_table(Tournament)
            .with_table(Team)
            .with_table(Participant)
            .with_table(Classification)
            .with_table(GameMatch)
    }

    /// Adds every table in the schema.
    ///
    /// Equivalent to `with_tournament_tables()` plus MatchSeries, MatchSeriesMatch and
    /// GalleryImage.
    pub fn with_all_tables(self) -> Self {
        self.with_tournament_tables()
            .with_table(MatchSeries)
            .with_table(MatchSeriesMatch)
            .with_table(GalleryImage)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;
        setup.with_indexes(self.indexes).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
