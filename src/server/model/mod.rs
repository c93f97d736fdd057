//! Server-side models: application state, the resource binding trait and operation outcomes.

pub mod app;
pub mod favorite;
pub mod list;
pub mod resource;
