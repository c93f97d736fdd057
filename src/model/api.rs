use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Response envelope carrying only a status message.
///
/// Used for errors and for successful operations that return no data.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    /// Human readable status message
    pub msg: String,
}

impl MessageDto {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}

/// Response envelope carrying a status message and the requested data.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ResponseDto<T> {
    /// Human readable status message
    pub msg: String,
    /// The entity or list of entities
    pub response: T,
}

impl<T> ResponseDto<T> {
    /// Wraps `response` with the `"Ok"` status message.
    pub fn ok(response: T) -> Self {
        Self {
            msg: "Ok".to_string(),
            response,
        }
    }
}
