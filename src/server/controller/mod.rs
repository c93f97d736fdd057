//! HTTP controller endpoints for the holocron API.
//!
//! One module per route group. Handlers read the path and raw body, call the matching service
//! and wrap the result in the `{ msg, response }` envelope; errors are turned into responses by
//! [`Error`](crate::server::error::Error).

pub mod favorite;
pub mod person;
pub mod planet;
pub mod resource;
pub mod user;
pub mod util;
pub mod vehicle;
