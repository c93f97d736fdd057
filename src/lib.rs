//! Holocron: a REST catalog of people, vehicles and planets with per-user favorites.

pub mod model;
pub mod server;
