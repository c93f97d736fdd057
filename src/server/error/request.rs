use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::message_response;

#[derive(Error, Debug)]
pub enum RequestError {
    #[error("The request body is null")]
    EmptyBody,
    #[error("The request body is not valid JSON: {0}")]
    MalformedBody(String),
    #[error("The request body must be a JSON object")]
    NotAnObject,
    #[error("Invalid path: {0}")]
    InvalidPath(String),
}

impl IntoResponse for RequestError {
    fn into_response(self) -> Response {
        tracing::debug!("Rejected request body: {}", self);

        message_response(StatusCode::BAD_REQUEST, self.to_string())
    }
}
