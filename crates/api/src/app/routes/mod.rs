use axum::{
    routing::{get, post},
    Router,
};

pub mod catalog;
pub mod plan;
pub mod system;

/// Router for the planning endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/plan", post(plan::plan))
        .route("/catalog", get(catalog::list_products))
        .route("/catalog/:key", get(catalog::get_product))
}
