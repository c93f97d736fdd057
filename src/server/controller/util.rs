use axum::{body::Bytes, extract::FromRequestParts, http::request::Parts};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::server::error::{request::RequestError, Error};

/// Path parameters extractor answering rejections with the JSON message envelope.
///
/// Wraps axum's `Path`; an unparsable segment such as `/people/abc` becomes
/// [`RequestError::InvalidPath`].
#[derive(Debug)]
pub struct Path<T>(pub T);

impl<T, S> FromRequestParts<S> for Path<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match axum::extract::Path::<T>::from_request_parts(parts, state).await {
            Ok(axum::extract::Path(value)) => Ok(Self(value)),
            Err(rejection) => Err(RequestError::InvalidPath(rejection.body_text()).into()),
        }
    }
}

/// Parses a raw request body into a JSON object.
///
/// The body is read whatever the request's content type claims.
///
/// # Returns
/// - `Ok(Map)` - The body's top-level object
/// - `Err(RequestError::EmptyBody)` - Body is empty, whitespace or `null`
/// - `Err(RequestError::MalformedBody)` - Body is not valid JSON
/// - `Err(RequestError::NotAnObject)` - Body is valid JSON but not an object
pub fn parse_body(body: &Bytes) -> Result<Map<String, Value>, Error> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(RequestError::EmptyBody.into());
    }

    let value: Value = serde_json::from_slice(body)
        .map_err(|err| RequestError::MalformedBody(err.to_string()))?;

    match value {
        Value::Object(map) => Ok(map),
        Value::Null => Err(RequestError::EmptyBody.into()),
        _ => Err(RequestError::NotAnObject.into()),
    }
}
