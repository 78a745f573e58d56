//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: shared planning state (config, catalog, clock)
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: request normalisation and response DTOs
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

use services::AppServices;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(services: Arc<AppServices>) -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .layer(Extension(services))
}
