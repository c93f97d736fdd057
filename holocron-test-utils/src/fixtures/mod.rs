//! Test fixture modules.
//!
//! - `catalog` - person, vehicle and planet rows
//! - `user` - user rows and favorite links
//! - `factory` - JSON request bodies shaped like client create requests

pub mod catalog;
pub mod factory;
pub mod user;
