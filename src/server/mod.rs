//! Server application core modules.
//!
//! Contains the HTTP routing, controllers, request validation, services, repositories and
//! error handling behind the holocron catalog API, along with configuration and startup.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod validation;
