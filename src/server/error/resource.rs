use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::message_response;

#[derive(Error, Debug)]
pub enum ResourceError {
    #[error("Not found. {resource} with id {id} doesn't exist")]
    NotFound { resource: &'static str, id: i32 },
}

impl IntoResponse for ResourceError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        message_response(StatusCode::NOT_FOUND, self.to_string())
    }
}
