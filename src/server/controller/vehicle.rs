use axum::{
    body::Bytes,
    extract::State,
    response::IntoResponse,
};

use crate::{
    model::{
        api::{MessageDto, ResponseDto},
        catalog::VehicleDto,
    },
    server::{
        controller::{resource, util::Path},
        error::Error,
        model::app::AppState,
    },
};

type Vehicle = entity::prelude::Vehicle;

pub static VEHICLES_TAG: &str = "vehicles";

/// List every vehicle
#[utoipa::path(
    get,
    path = "/vehicles",
    tag = VEHICLES_TAG,
    responses(
        (status = 200, description = "All vehicles ordered by ID", body = ResponseDto<Vec<VehicleDto>>),
        (status = 204, description = "No vehicles stored"),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn list_vehicles(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    resource::list::<Vehicle>(&state).await
}

/// Get a vehicle by ID
#[utoipa::path(
    get,
    path = "/vehicles/{id}",
    tag = VEHICLES_TAG,
    params(("id" = i32, Path, description = "Vehicle ID")),
    responses(
        (status = 200, description = "The vehicle", body = ResponseDto<VehicleDto>),
        (status = 404, description = "Vehicle not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_vehicle(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    resource::get::<Vehicle>(&state, id).await
}

/// Create a vehicle
///
/// Every attribute is required. The name must not be taken by another vehicle.
#[utoipa::path(
    post,
    path = "/vehicles",
    tag = VEHICLES_TAG,
    request_body = VehicleDto,
    responses(
        (status = 200, description = "The stored vehicle", body = ResponseDto<VehicleDto>),
        (status = 400, description = "Invalid body, missing or mistyped field, or duplicate name", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn create_vehicle(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, Error> {
    resource::create::<Vehicle>(&state, &body).await
}

/// Update some attributes of a vehicle
#[utoipa::path(
    put,
    path = "/vehicles/{id}",
    tag = VEHICLES_TAG,
    params(("id" = i32, Path, description = "Vehicle ID")),
    request_body = VehicleDto,
    responses(
        (status = 200, description = "The updated vehicle", body = ResponseDto<VehicleDto>),
        (status = 400, description = "Invalid body, mistyped field or duplicate name", body = MessageDto),
        (status = 404, description = "Vehicle not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn update_vehicle(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    body: Bytes,
) -> Result<impl IntoResponse, Error> {
    resource::update::<Vehicle>(&state, id, &body).await
}

/// Delete a vehicle along with every favorite link to it
#[utoipa::path(
    delete,
    path = "/vehicles/{id}",
    tag = VEHICLES_TAG,
    params(("id" = i32, Path, description = "Vehicle ID")),
    responses(
        (status = 200, description = "Vehicle deleted", body = MessageDto),
        (status = 404, description = "Vehicle not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn delete_vehicle(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    resource::delete::<Vehicle>(&state, id).await
}
