use std::sync::Arc;

use axum::{body::Bytes, extract::Extension, response::IntoResponse, Json};
use tracing::instrument;

use crate::app::errors;
use crate::app::services::AppServices;

/// `POST /plan`. Any body is accepted; unusable fields are defaulted and reported.
#[instrument(skip_all, fields(body_len = body.len()))]
pub async fn plan(
    Extension(services): Extension<Arc<AppServices>>,
    body: Bytes,
) -> axum::response::Response {
    match services.plan(&body) {
        Ok(response) => Json(response).into_response(),
        Err(e) => errors::planning_error_to_response(e),
    }
}
