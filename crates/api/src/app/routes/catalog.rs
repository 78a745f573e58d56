use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    response::IntoResponse,
    Json,
};

use bakeryplan_planning::PlanningError;

use crate::app::errors;
use crate::app::services::AppServices;

pub async fn list_products(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    Json(services.catalog()).into_response()
}

pub async fn get_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(key): Path<String>,
) -> axum::response::Response {
    match services.catalog().require(&key) {
        Ok(product) => Json(product).into_response(),
        Err(e) => errors::planning_error_to_response(PlanningError::from(e)),
    }
}
