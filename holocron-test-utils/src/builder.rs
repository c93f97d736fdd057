//! Declarative test builder.
//!
//! Configuration methods only queue work; tables are created and fixture rows inserted when
//! `build()` runs.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
#[derive(Default)]
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_catalog_tables: bool,

    users: Vec<String>,
    people: Vec<String>,
    vehicles: Vec<String>,
    planets: Vec<String>,
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add every catalog table: users, people, vehicles, planets and the three favorite
    /// junctions, in foreign key order.
    pub fn with_catalog_tables(mut self) -> Self {
        self.include_catalog_tables = true;
        self
    }

    /// Add a single entity table to the test database.
    ///
    /// Useful for tests that need a partial schema, e.g. to provoke a database error by
    /// leaving a referenced table out.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use holocron_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), holocron_test_utils::TestError> {
    /// let test = TestBuilder::new().with_table(User).with_table(Planet).build().await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a user with the provided user name during `build()`.
    pub fn with_user(mut self, user_name: &str) -> Self {
        self.users.push(user_name.to_string());
        self
    }

    /// Insert a person with mock attributes and the provided name during `build()`.
    pub fn with_person(mut self, name: &str) -> Self {
        self.people.push(name.to_string());
        self
    }

    /// Insert a vehicle with mock attributes and the provided name during `build()`.
    pub fn with_vehicle(mut self, name: &str) -> Self {
        self.vehicles.push(name.to_string());
        self
    }

    /// Insert a planet with mock attributes and the provided name during `build()`.
    pub fn with_planet(mut self, name: &str) -> Self {
        self.planets.push(name.to_string());
        self
    }

    /// Create the configured tables and insert the queued fixtures.
    ///
    /// Fixture rows are inserted in the order they were queued, so the first queued user gets
    /// ID 1, the second ID 2, and likewise for each resource table.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Database ready for the test
    /// - `Err(TestError::DbErr)` - Table creation or a fixture insert failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestContext::new().await?;

        let mut all_tables = Vec::new();

        if self.include_catalog_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::User),
                schema.create_table_from_entity(entity::prelude::Person),
                schema.create_table_from_entity(entity::prelude::Vehicle),
                schema.create_table_from_entity(entity::prelude::Planet),
                schema.create_table_from_entity(entity::prelude::FavoritePerson),
                schema.create_table_from_entity(entity::prelude::FavoriteVehicle),
                schema.create_table_from_entity(entity::prelude::FavoritePlanet),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        for user_name in &self.users {
            setup.user().insert_user(user_name).await?;
        }

        for name in &self.people {
            setup.catalog().insert_mock_person(name).await?;
        }

        for name in &self.vehicles {
            setup.catalog().insert_mock_vehicle(name).await?;
        }

        for name in &self.planets {
            setup.catalog().insert_mock_planet(name).await?;
        }

        Ok(setup)
    }
}
