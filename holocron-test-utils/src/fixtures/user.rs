//! User and favorite link fixture utilities.

use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn user<'a>(&'a self) -> UserFixtures<'a> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> UserFixtures<'a> {
    pub async fn insert_user(&self, user_name: &str) -> Result<entity::user::Model, TestError> {
        Ok(entity::prelude::User::insert(entity::user::ActiveModel {
            user_name: ActiveValue::Set(user_name.to_string()),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    /// Link a user to a person, bypassing the favorites service checks.
    pub async fn insert_favorite_person(
        &self,
        user_id: i32,
        person_id: i32,
    ) -> Result<entity::favorite_person::Model, TestError> {
        entity::prelude::FavoritePerson::insert(entity::favorite_person::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            person_id: ActiveValue::Set(person_id),
        })
        .exec_without_returning(&self.setup.db)
        .await?;

        Ok(entity::favorite_person::Model { user_id, person_id })
    }

    /// Link a user to a vehicle, bypassing the favorites service checks.
    pub async fn insert_favorite_vehicle(
        &self,
        user_id: i32,
        vehicle_id: i32,
    ) -> Result<entity::favorite_vehicle::Model, TestError> {
        entity::prelude::FavoriteVehicle::insert(entity::favorite_vehicle::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            vehicle_id: ActiveValue::Set(vehicle_id),
        })
        .exec_without_returning(&self.setup.db)
        .await?;

        Ok(entity::favorite_vehicle::Model {
            user_id,
            vehicle_id,
        })
    }

    /// Link a user to a planet, bypassing the favorites service checks.
    pub async fn insert_favorite_planet(
        &self,
        user_id: i32,
        planet_id: i32,
    ) -> Result<entity::favorite_planet::Model, TestError> {
        entity::prelude::FavoritePlanet::insert(entity::favorite_planet::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            planet_id: ActiveValue::Set(planet_id),
        })
        .exec_without_returning(&self.setup.db)
        .await?;

        Ok(entity::favorite_planet::Model { user_id, planet_id })
    }
}
