use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub user_name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PersonDto {
    pub id: i32,
    pub name: String,
    pub mass: i64,
    pub height: i64,
    pub hair_color: String,
    pub gender: String,
    pub eye_color: String,
    pub birth_year: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct VehicleDto {
    pub id: i32,
    pub name: String,
    pub cargo_capacity: i64,
    pub consumables: String,
    pub cost_in_credits: i64,
    pub crew: i64,
    pub length: i64,
    pub manufacturer: String,
    pub max_atmosphering_speed: i64,
    pub model: String,
    pub passengers: i64,
    pub vehicle_class: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PlanetDto {
    pub id: i32,
    pub name: String,
    pub climate: String,
    pub diameter: i64,
    pub gravity: String,
    pub orbital_period: i64,
    pub population: i64,
    pub rotation_period: i64,
    pub surface_water: i64,
    pub terrain: String,
}

impl From<entity::user::Model> for UserDto {
    fn from(model: entity::user::Model) -> Self {
        Self {
            id: model.id,
            user_name: model.user_name,
        }
    }
}

impl From<entity::person::Model> for PersonDto {
    fn from(model: entity::person::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            mass: model.mass,
            height: model.height,
            hair_color: model.hair_color,
            gender: model.gender,
            eye_color: model.eye_color,
            birth_year: model.birth_year,
        }
    }
}

impl From<entity::vehicle::Model> for VehicleDto {
    fn from(model: entity::vehicle::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            cargo_capacity: model.cargo_capacity,
            consumables: model.consumables,
            cost_in_credits: model.cost_in_credits,
            crew: model.crew,
            length: model.length,
            manufacturer: model.manufacturer,
            max_atmosphering_speed: model.max_atmosphering_speed,
            model: model.model,
            passengers: model.passengers,
            vehicle_class: model.vehicle_class,
        }
    }
}

impl From<entity::planet::Model> for PlanetDto {
    fn from(model: entity::planet::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            climate: model.climate,
            diameter: model.diameter,
            gravity: model.gravity,
            orbital_period: model.orbital_period,
            population: model.population,
            rotation_period: model.rotation_period,
            surface_water: model.surface_water,
            terrain: model.terrain,
        }
    }
}
