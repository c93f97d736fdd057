//! Storage models for the holocron catalog.
//!
//! One sea-orm entity per table: the four primary resources and the three favorite junctions.

pub mod prelude;

pub mod favorite_person;
pub mod favorite_planet;
pub mod favorite_vehicle;
pub mod person;
pub mod planet;
pub mod user;
pub mod vehicle;
