use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::{model::favorite::ResourceKind, server::error::message_response};

#[derive(Error, Debug)]
pub enum FavoriteError {
    #[error("User with id {0} doesn't exist")]
    UserNotFound(i32),
    #[error("Favorite target in {kind} with id {target_id} doesn't exist")]
    TargetNotFound { kind: ResourceKind, target_id: i32 },
    #[error("User {user_id} already has {kind} {target_id} as a favorite")]
    AlreadyFavorited {
        user_id: i32,
        kind: ResourceKind,
        target_id: i32,
    },
    #[error("User {user_id} has no favorite in {kind} with id {target_id}")]
    LinkNotFound {
        user_id: i32,
        kind: ResourceKind,
        target_id: i32,
    },
}

impl IntoResponse for FavoriteError {
    fn into_response(self) -> Response {
        tracing::debug!("Favorite error: {}", self);

        let status = match self {
            Self::AlreadyFavorited { .. } => StatusCode::BAD_REQUEST,
            Self::UserNotFound(_) | Self::TargetNotFound { .. } | Self::LinkNotFound { .. } => {
                StatusCode::NOT_FOUND
            }
        };

        message_response(status, self.to_string())
    }
}
