//! Data access layer repositories.
//!
//! Repositories wrap sea-orm queries and report storage failures as [`sea_orm::DbErr`]; mapping
//! absent rows and constraint violations to domain errors is left to the service layer.

pub mod favorite;
pub mod resource;
