use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::{error::message_response, validation::FieldType};

/// Violation found while validating a create or update body.
///
/// Only the first violation is reported; validation stops there.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Field '{0}' not found")]
    MissingField(&'static str),
    #[error("Field '{field}' must be of type {expected}")]
    WrongType {
        field: &'static str,
        expected: FieldType,
    },
    #[error("Field '{field}' must be unique, '{value}' already exists")]
    DuplicateValue { field: &'static str, value: String },
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        tracing::debug!("Validation error: {}", self);

        message_response(StatusCode::BAD_REQUEST, self.to_string())
    }
}
