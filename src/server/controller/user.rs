use axum::{
    body::Bytes,
    extract::State,
    response::IntoResponse,
};

use crate::{
    model::{
        api::{MessageDto, ResponseDto},
        catalog::UserDto,
    },
    server::{
        controller::{resource, util::Path},
        error::Error,
        model::app::AppState,
    },
};

type User = entity::prelude::User;

pub static USERS_TAG: &str = "users";

/// List every user
#[utoipa::path(
    get,
    path = "/users",
    tag = USERS_TAG,
    responses(
        (status = 200, description = "All users ordered by ID", body = ResponseDto<Vec<UserDto>>),
        (status = 204, description = "No users stored"),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn list_users(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    resource::list::<User>(&state).await
}

/// Get a user by ID
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = USERS_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "The user", body = ResponseDto<UserDto>),
        (status = 404, description = "User not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    resource::get::<User>(&state, id).await
}

/// Create a user
#[utoipa::path(
    post,
    path = "/users",
    tag = USERS_TAG,
    request_body = UserDto,
    responses(
        (status = 200, description = "The stored user", body = ResponseDto<UserDto>),
        (status = 400, description = "Invalid body, missing or mistyped field", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, Error> {
    resource::create::<User>(&state, &body).await
}

/// Update some attributes of a user
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = USERS_TAG,
    params(("id" = i32, Path, description = "User ID")),
    request_body = UserDto,
    responses(
        (status = 200, description = "The updated user", body = ResponseDto<UserDto>),
        (status = 400, description = "Invalid body or mistyped field", body = MessageDto),
        (status = 404, description = "User not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    body: Bytes,
) -> Result<impl IntoResponse, Error> {
    resource::update::<User>(&state, id, &body).await
}

/// Delete a user along with all of their favorites
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = USERS_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "User deleted", body = MessageDto),
        (status = 404, description = "User not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    resource::delete::<User>(&state, id).await
}
