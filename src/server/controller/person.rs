use axum::{
    body::Bytes,
    extract::State,
    response::IntoResponse,
};

use crate::{
    model::{
        api::{MessageDto, ResponseDto},
        catalog::PersonDto,
    },
    server::{
        controller::{resource, util::Path},
        error::Error,
        model::app::AppState,
    },
};

type Person = entity::prelude::Person;

pub static PEOPLE_TAG: &str = "people";

/// List every person
#[utoipa::path(
    get,
    path = "/people",
    tag = PEOPLE_TAG,
    responses(
        (status = 200, description = "All people ordered by ID", body = ResponseDto<Vec<PersonDto>>),
        (status = 204, description = "No people stored"),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn list_people(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    resource::list::<Person>(&state).await
}

/// Get a person by ID
#[utoipa::path(
    get,
    path = "/people/{id}",
    tag = PEOPLE_TAG,
    params(("id" = i32, Path, description = "Person ID")),
    responses(
        (status = 200, description = "The person", body = ResponseDto<PersonDto>),
        (status = 404, description = "Person not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_person(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    resource::get::<Person>(&state, id).await
}

/// Create a person
///
/// Every attribute is required. The name must not be taken by another person.
#[utoipa::path(
    post,
    path = "/people",
    tag = PEOPLE_TAG,
    request_body = PersonDto,
    responses(
        (status = 200, description = "The stored person", body = ResponseDto<PersonDto>),
        (status = 400, description = "Invalid body, missing or mistyped field, or duplicate name", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn create_person(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, Error> {
    resource::create::<Person>(&state, &body).await
}

/// Update some attributes of a person
#[utoipa::path(
    put,
    path = "/people/{id}",
    tag = PEOPLE_TAG,
    params(("id" = i32, Path, description = "Person ID")),
    request_body = PersonDto,
    responses(
        (status = 200, description = "The updated person", body = ResponseDto<PersonDto>),
        (status = 400, description = "Invalid body, mistyped field or duplicate name", body = MessageDto),
        (status = 404, description = "Person not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn update_person(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    body: Bytes,
) -> Result<impl IntoResponse, Error> {
    resource::update::<Person>(&state, id, &body).await
}

/// Delete a person along with every favorite link to them
#[utoipa::path(
    delete,
    path = "/people/{id}",
    tag = PEOPLE_TAG,
    params(("id" = i32, Path, description = "Person ID")),
    responses(
        (status = 200, description = "Person deleted", body = MessageDto),
        (status = 404, description = "Person not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn delete_person(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    resource::delete::<Person>(&state, id).await
}
