use axum::{
    body::Bytes,
    extract::State,
    response::IntoResponse,
};

use crate::{
    model::{
        api::{MessageDto, ResponseDto},
        catalog::PlanetDto,
    },
    server::{
        controller::{resource, util::Path},
        error::Error,
        model::app::AppState,
    },
};

type Planet = entity::prelude::Planet;

pub static PLANETS_TAG: &str = "planets";

/// List every planet
#[utoipa::path(
    get,
    path = "/planets",
    tag = PLANETS_TAG,
    responses(
        (status = 200, description = "All planets ordered by ID", body = ResponseDto<Vec<PlanetDto>>),
        (status = 204, description = "No planets stored"),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn list_planets(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    resource::list::<Planet>(&state).await
}

/// Get a planet by ID
#[utoipa::path(
    get,
    path = "/planets/{id}",
    tag = PLANETS_TAG,
    params(("id" = i32, Path, description = "Planet ID")),
    responses(
        (status = 200, description = "The planet", body = ResponseDto<PlanetDto>),
        (status = 404, description = "Planet not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_planet(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    resource::get::<Planet>(&state, id).await
}

/// Create a planet
///
/// Every attribute is required. The name must not be taken by another planet.
#[utoipa::path(
    post,
    path = "/planets",
    tag = PLANETS_TAG,
    request_body = PlanetDto,
    responses(
        (status = 200, description = "The stored planet", body = ResponseDto<PlanetDto>),
        (status = 400, description = "Invalid body, missing or mistyped field, or duplicate name", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn create_planet(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, Error> {
    resource::create::<Planet>(&state, &body).await
}

/// Update some attributes of a planet
#[utoipa::path(
    put,
    path = "/planets/{id}",
    tag = PLANETS_TAG,
    params(("id" = i32, Path, description = "Planet ID")),
    request_body = PlanetDto,
    responses(
        (status = 200, description = "The updated planet", body = ResponseDto<PlanetDto>),
        (status = 400, description = "Invalid body, mistyped field or duplicate name", body = MessageDto),
        (status = 404, description = "Planet not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn update_planet(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    body: Bytes,
) -> Result<impl IntoResponse, Error> {
    resource::update::<Planet>(&state, id, &body).await
}

/// Delete a planet along with every favorite link to it
#[utoipa::path(
    delete,
    path = "/planets/{id}",
    tag = PLANETS_TAG,
    params(("id" = i32, Path, description = "Planet ID")),
    responses(
        (status = 200, description = "Planet deleted", body = MessageDto),
        (status = 404, description = "Planet not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn delete_planet(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    resource::delete::<Planet>(&state, id).await
}
