use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{MessageDto, ResponseDto},
        favorite::{FavoriteDto, ResourceKind},
    },
    server::{
        controller::util::Path, error::Error, model::app::AppState,
        service::favorite::FavoriteService,
    },
};

pub static FAVORITE_TAG: &str = "favorite";

/// Add a person, vehicle or planet to a user's favorites
///
/// # Responses
/// - 200 (OK): Link stored
/// - 400 (Bad Request): The user already favorited this target, or the kind is unknown
/// - 404 (Not Found): User or target does not exist; the user is checked first
#[utoipa::path(
    post,
    path = "/favorite/{kind}/{target_id}/{user_id}",
    tag = FAVORITE_TAG,
    params(
        ("kind" = ResourceKind, Path, description = "Kind of the favorited target"),
        ("target_id" = i32, Path, description = "ID of the person, vehicle or planet"),
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Favorite added", body = MessageDto),
        (status = 400, description = "Already favorited", body = MessageDto),
        (status = 404, description = "User or target not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn add_favorite(
    State(state): State<AppState>,
    Path((kind, target_id, user_id)): Path<(ResourceKind, i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    FavoriteService::new(&state.db)
        .add_favorite(user_id, kind, target_id)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Ok"))))
}

/// Remove a person, vehicle or planet from a user's favorites
#[utoipa::path(
    delete,
    path = "/favorite/{kind}/{target_id}/{user_id}",
    tag = FAVORITE_TAG,
    params(
        ("kind" = ResourceKind, Path, description = "Kind of the favorited target"),
        ("target_id" = i32, Path, description = "ID of the person, vehicle or planet"),
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Favorite removed", body = MessageDto),
        (status = 404, description = "User, target or link not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn remove_favorite(
    State(state): State<AppState>,
    Path((kind, target_id, user_id)): Path<(ResourceKind, i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    FavoriteService::new(&state.db)
        .remove_favorite(user_id, kind, target_id)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Ok"))))
}

/// List a user's favorites
///
/// People come first, then vehicles, then planets.
#[utoipa::path(
    get,
    path = "/users/favorites/{user_id}",
    tag = FAVORITE_TAG,
    params(("user_id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "The user's favorites", body = ResponseDto<Vec<FavoriteDto>>),
        (status = 204, description = "The user has no favorites"),
        (status = 404, description = "User not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn list_favorites(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let favorites = FavoriteService::new(&state.db)
        .list_favorites(user_id)
        .await?;

    Ok(favorites)
}
