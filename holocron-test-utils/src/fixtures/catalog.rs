//! Catalog fixture utilities.
//!
//! Inserts people, vehicles and planets with fixed mock attributes; only the name varies since
//! it is the unique column.

use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn catalog<'a>(&'a self) -> CatalogFixtures<'a> {
        CatalogFixtures { setup: self }
    }
}

pub struct CatalogFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> CatalogFixtures<'a> {
    /// Insert a person with mock attributes.
    pub async fn insert_mock_person(&self, name: &str) -> Result<entity::person::Model, TestError> {
        Ok(entity::prelude::Person::insert(entity::person::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            mass: ActiveValue::Set(77),
            height: ActiveValue::Set(172),
            hair_color: ActiveValue::Set("blond".to_string()),
            gender: ActiveValue::Set("male".to_string()),
            eye_color: ActiveValue::Set("blue".to_string()),
            birth_year: ActiveValue::Set("19BBY".to_string()),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    /// Insert a vehicle with mock attributes.
    pub async fn insert_mock_vehicle(
        &self,
        name: &str,
    ) -> Result<entity::vehicle::Model, TestError> {
        Ok(entity::prelude::Vehicle::insert(entity::vehicle::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            cargo_capacity: ActiveValue::Set(50000),
            consumables: ActiveValue::Set("2 months".to_string()),
            cost_in_credits: ActiveValue::Set(150000),
            crew: ActiveValue::Set(46),
            length: ActiveValue::Set(36),
            manufacturer: ActiveValue::Set("Corellia Mining Corporation".to_string()),
            max_atmosphering_speed: ActiveValue::Set(30),
            model: ActiveValue::Set("Digger Crawler".to_string()),
            passengers: ActiveValue::Set(30),
            vehicle_class: ActiveValue::Set("wheeled".to_string()),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    /// Insert a planet with mock attributes.
    pub async fn insert_mock_planet(&self, name: &str) -> Result<entity::planet::Model, TestError> {
        Ok(entity::prelude::Planet::insert(entity::planet::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            climate: ActiveValue::Set("arid".to_string()),
            diameter: ActiveValue::Set(10465),
            gravity: ActiveValue::Set("1 standard".to_string()),
            orbital_period: ActiveValue::Set(304),
            population: ActiveValue::Set(200000),
            rotation_period: ActiveValue::Set(23),
            surface_water: ActiveValue::Set(1),
            terrain: ActiveValue::Set("desert".to_string()),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }
}
