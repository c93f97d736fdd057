//! Service layer for business logic.
//!
//! Services validate request bodies, call repositories, and translate absent rows and storage
//! constraint violations into the typed errors of [`crate::server::error`].

pub mod favorite;
pub mod resource;

#[cfg(test)]
mod tests;
