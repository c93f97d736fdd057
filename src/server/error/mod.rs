//! Error types for the holocron server.
//!
//! Each domain has its own `thiserror` enum implementing `IntoResponse`; [`Error`] aggregates
//! them with `#[from]` so handlers and services can use `?` throughout. Client-correctable
//! errors map to 4xx responses with a message naming the problem. Everything else is logged
//! and answered with a generic 500.

pub mod config;
pub mod favorite;
pub mod request;
pub mod resource;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::MessageDto,
    server::error::{
        config::ConfigError, favorite::FavoriteError, request::RequestError,
        resource::ResourceError, validation::ValidationError,
    },
};

/// Main error type for the holocron server.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Request body could not be read as a JSON object.
    #[error(transparent)]
    RequestError(#[from] RequestError),
    /// Body failed presence, type or uniqueness validation.
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    /// Entity lookup by identifier found nothing.
    #[error(transparent)]
    ResourceError(#[from] ResourceError),
    /// Favorite link could not be created or removed.
    #[error(transparent)]
    FavoriteError(#[from] FavoriteError),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// I/O error (binding the listener, serving connections).
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Malformed body, validation failure or duplicate favorite
/// - 404 Not Found - Missing entity, user, favorite target or favorite link
/// - 500 Internal Server Error - Everything else (logged)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::RequestError(err) => err.into_response(),
            Self::ValidationError(err) => err.into_response(),
            Self::ResourceError(err) => err.into_response(),
            Self::FavoriteError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Builds a JSON error response with the given status and message.
pub(crate) fn message_response(status: StatusCode, msg: impl Into<String>) -> Response {
    (status, Json(MessageDto::new(msg))).into_response()
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the full error but returns a generic message so implementation details never reach
/// the client.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        message_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }
}
