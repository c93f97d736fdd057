//! Test context structure and utilities.
//!
//! This module provides the `TestContext` returned by `TestBuilder::build()`. The context owns
//! an in-memory SQLite database; fixture helpers hang off it through `catalog()` and `user()`.

use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::error::TestError;

/// Test environment produced by [`TestBuilder`](crate::TestBuilder).
///
/// ```ignore
/// let test = TestBuilder::new().with_catalog_tables().build().await?;
///
/// let planet = test.catalog().insert_mock_planet("Tatooine").await?;
/// let user = test.user().insert_user("luke").await?;
/// test.user().insert_favorite_planet(user.id, planet.id).await?;
/// ```
pub struct TestContext {
    /// Connection to the in-memory SQLite database
    pub db: DatabaseConnection,
}

impl TestContext {
    /// Convert the database connection into any type that can be built from it.
    ///
    /// Lets integration tests produce the server's `AppState` without this crate depending on
    /// the server crate.
    pub fn to_app_state<T>(&self) -> T
    where
        T: From<DatabaseConnection>,
    {
        T::from(self.db.clone())
    }

    /// Connects to a fresh in-memory SQLite database.
    ///
    /// SQLite foreign keys are enforced by the sqlx driver, so cascade and referential checks
    /// behave as they do in production.
    pub(crate) async fn new() -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext { db })
    }

    /// Executes CREATE TABLE statements in the given order.
    pub(crate) async fn with_tables(
        &self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }
}
