//! Binding between favorite junction entities and the resource they point at.

use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ActiveValue, EntityTrait, FromQueryResult, ModelTrait,
};

use crate::{model::favorite::ResourceKind, server::model::resource::Resource};

/// A junction table linking users to one resource kind.
pub trait FavoriteLink: Send + Sync + 'static {
    type Entity: EntityTrait<Model = Self::Model, ActiveModel = Self::ActiveModel>;
    type Model: ModelTrait<Entity = Self::Entity> + FromQueryResult + Send + Sync;
    type ActiveModel: ActiveModelTrait<Entity = Self::Entity> + ActiveModelBehavior + Send + Sync;
    /// The resource a link points at
    type Target: Resource;

    const KIND: ResourceKind;

    fn user_column() -> <Self::Entity as EntityTrait>::Column;

    fn target_column() -> <Self::Entity as EntityTrait>::Column;

    fn link(user_id: i32, target_id: i32) -> Self::ActiveModel;

    fn target_id(model: &Self::Model) -> i32;
}

impl FavoriteLink for entity::favorite_person::Entity {
    type Entity = Self;
    type Model = entity::favorite_person::Model;
    type ActiveModel = entity::favorite_person::ActiveModel;
    type Target = entity::person::Entity;

    const KIND: ResourceKind = ResourceKind::People;

    fn user_column() -> entity::favorite_person::Column {
        entity::favorite_person::Column::UserId
    }

    fn target_column() -> entity::favorite_person::Column {
        entity::favorite_person::Column::PersonId
    }

    fn link(user_id: i32, target_id: i32) -> Self::ActiveModel {
        entity::favorite_person::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            person_id: ActiveValue::Set(target_id),
        }
    }

    fn target_id(model: &Self::Model) -> i32 {
        model.person_id
    }
}

impl FavoriteLink for entity::favorite_vehicle::Entity {
    type Entity = Self;
    type Model = entity::favorite_vehicle::Model;
    type ActiveModel = entity::favorite_vehicle::ActiveModel;
    type Target = entity::vehicle::Entity;

    const KIND: ResourceKind = ResourceKind::Vehicles;

    fn user_column() -> entity::favorite_vehicle::Column {
        entity::favorite_vehicle::Column::UserId
    }

    fn target_column() -> entity::favorite_vehicle::Column {
        entity::favorite_vehicle::Column::VehicleId
    }

    fn link(user_id: i32, target_id: i32) -> Self::ActiveModel {
        entity::favorite_vehicle::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            vehicle_id: ActiveValue::Set(target_id),
        }
    }

    fn target_id(model: &Self::Model) -> i32 {
        model.vehicle_id
    }
}

impl FavoriteLink for entity::favorite_planet::Entity {
    type Entity = Self;
    type Model = entity::favorite_planet::Model;
    type ActiveModel = entity::favorite_planet::ActiveModel;
    type Target = entity::planet::Entity;

    const KIND: ResourceKind = ResourceKind::Planets;

    fn user_column() -> entity::favorite_planet::Column {
        entity::favorite_planet::Column::UserId
    }

    fn target_column() -> entity::favorite_planet::Column {
        entity::favorite_planet::Column::PlanetId
    }

    fn link(user_id: i32, target_id: i32) -> Self::ActiveModel {
        entity::favorite_planet::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            planet_id: ActiveValue::Set(target_id),
        }
    }

    fn target_id(model: &Self::Model) -> i32 {
        model.planet_id
    }
}
