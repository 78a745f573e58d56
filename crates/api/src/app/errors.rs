use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use bakeryplan_core::DomainError;
use bakeryplan_planning::PlanningError;

pub fn planning_error_to_response(err: PlanningError) -> axum::response::Response {
    match err {
        PlanningError::InvalidConfig(msg) => {
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "invalid_config", msg)
        }
        PlanningError::Domain(DomainError::InvariantViolation(msg)) => {
            json_error(StatusCode::UNPROCESSABLE_ENTITY, "invariant_violation", msg)
        }
        PlanningError::Domain(DomainError::NotFound(what)) => {
            json_error(StatusCode::NOT_FOUND, "not_found", what)
        }
        PlanningError::Domain(e) => {
            json_error(StatusCode::BAD_REQUEST, "validation_error", e.to_string())
        }
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "ok": false,
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
