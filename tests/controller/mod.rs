//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with an `AppState` over an in-memory database, and the
//! response status and envelope are checked.

mod favorite;
mod planet;
mod user;
mod vehicle;

use axum::{body::Bytes, response::Response};
use holocron_test_utils::prelude::*;
use serde_json::Value;

/// Reads a response body as JSON.
async fn body_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    serde_json::from_slice(&bytes).unwrap()
}

fn json_bytes(value: impl serde::Serialize) -> Bytes {
    Bytes::from(serde_json::to_vec(&value).unwrap())
}
