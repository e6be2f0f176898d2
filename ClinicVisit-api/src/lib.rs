// ClinicVisit-api lib.rs
//
// HTTP surface of the clinic visit engine. Every endpoint evaluates the
// domain rules and returns JSON; nothing is stored.

// Public modules
pub mod api;
pub mod config;
pub mod entities;
pub mod openapi;

use axum::Router;

pub use config::{ApiConfig, ConfigError};

/// Create the application router
pub fn create_application(config: &ApiConfig) -> Router {
    api::create_app(config)
}
