use std::sync::Arc;

use axum::{
    http::Method,
    routing::{get, post},
    Extension, Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::debug;

use crate::api::handlers::{health, registers, vitals};
use crate::config::ApiConfig;
use crate::openapi::configure_swagger_routes;

/// Create the application router
pub fn create_app(config: &ApiConfig) -> Router {
    debug!("Creating application router");

    let health_service = health::create_health_service();

    let api_routes = Router::new()
        .route("/vitals/assess", post(vitals::assess_vitals))
        .route("/vitals/age", get(vitals::get_age))
        .route("/vitals/reference", get(vitals::get_reference_ranges))
        .route("/registers", get(registers::get_register_options))
        .route("/registers/purpose", get(registers::get_purpose))
        .route("/tabs", get(registers::get_visible_tabs))
        .route("/visits/validate", post(registers::validate_visit));

    debug!("API routes configured");

    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .layer(Extension(health_service))
        .layer(Extension(Arc::new(config.clone())));

    let app = Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes);

    let app = add_swagger_ui(app);
    debug!("Swagger UI merged");

    health::initialize_server_start_time();

    app.layer(cors_layer(config)).layer(TraceLayer::new_for_http())
}

/// CORS policy: one configured origin, or any origin when none is set
fn cors_layer(config: &ApiConfig) -> CorsLayer {
    match &config.cors_allow_origin {
        Some(origin) => CorsLayer::new()
            .allow_origin(origin.clone())
            .allow_methods([Method::GET, Method::POST])
            .allow_headers(Any),
        None => CorsLayer::permissive(),
    }
}

/// Add Swagger UI to the router
pub fn add_swagger_ui(app: Router) -> Router {
    app.merge(configure_swagger_routes())
}
