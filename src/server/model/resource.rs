//! Binding between storage entities and their validation schemas.
//!
//! [`Resource`] is what lets one generic repository and service serve users, people, vehicles
//! and planets alike. It is implemented directly on the sea-orm entity types.

use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, EntityTrait, FromQueryResult, IntoActiveModel,
    ModelTrait,
};
use serde::Serialize;

use crate::{
    model::catalog::{PersonDto, PlanetDto, UserDto, VehicleDto},
    server::validation::{schema, EntitySchema},
};

/// A primary entity kind stored in its own table and keyed by an integer identifier.
pub trait Resource: Send + Sync + 'static {
    type Entity: EntityTrait<Model = Self::Model, ActiveModel = Self::ActiveModel>;
    type Model: ModelTrait<Entity = Self::Entity>
        + FromQueryResult
        + IntoActiveModel<Self::ActiveModel>
        + Send
        + Sync;
    type ActiveModel: ActiveModelTrait<Entity = Self::Entity>
        + ActiveModelBehavior
        + Default
        + Send
        + Sync;
    /// Representation returned to API clients
    type Dto: Serialize + From<Self::Model> + Send;

    /// Field schema validating request bodies; field names match column names.
    fn schema() -> &'static EntitySchema;

    fn id_column() -> <Self::Entity as EntityTrait>::Column;

    fn id(model: &Self::Model) -> i32;

    /// Label used in messages, e.g. `"Planet"`.
    fn label() -> &'static str {
        Self::schema().entity
    }
}

impl Resource for entity::user::Entity {
    type Entity = Self;
    type Model = entity::user::Model;
    type ActiveModel = entity::user::ActiveModel;
    type Dto = UserDto;

    fn schema() -> &'static EntitySchema {
        &schema::USER
    }

    fn id_column() -> entity::user::Column {
        entity::user::Column::Id
    }

    fn id(model: &entity::user::Model) -> i32 {
        model.id
    }
}

impl Resource for entity::person::Entity {
    type Entity = Self;
    type Model = entity::person::Model;
    type ActiveModel = entity::person::ActiveModel;
    type Dto = PersonDto;

    fn schema() -> &'static EntitySchema {
        &schema::PERSON
    }

    fn id_column() -> entity::person::Column {
        entity::person::Column::Id
    }

    fn id(model: &entity::person::Model) -> i32 {
        model.id
    }
}

impl Resource for entity::vehicle::Entity {
    type Entity = Self;
    type Model = entity::vehicle::Model;
    type ActiveModel = entity::vehicle::ActiveModel;
    type Dto = VehicleDto;

    fn schema() -> &'static EntitySchema {
        &schema::VEHICLE
    }

    fn id_column() -> entity::vehicle::Column {
        entity::vehicle::Column::Id
    }

    fn id(model: &entity::vehicle::Model) -> i32 {
        model.id
    }
}

impl Resource for entity::planet::Entity {
    type Entity = Self;
    type Model = entity::planet::Model;
    type ActiveModel = entity::planet::ActiveModel;
    type Dto = PlanetDto;

    fn schema() -> &'static EntitySchema {
        &schema::PLANET
    }

    fn id_column() -> entity::planet::Column {
        entity::planet::Column::Id
    }

    fn id(model: &entity::planet::Model) -> i32 {
        model.id
    }
}
