//! Shared test harness for the holocron workspace.
//!
//! Tests describe their environment through [`TestBuilder`] (tables and fixture rows) and receive
//! a [`TestContext`] wrapping an in-memory SQLite database with those rows in place.

pub mod builder;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{fixtures::factory, TestBuilder, TestContext, TestError};
}
