use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;

use super::{AppState, ErrorResponse};
use crate::models::CalculateRequest;
use crate::tools::calculate::{self, DiluteRequest};

/// Unparseable bodies keep the `{"error": ...}` shape instead of axum's plain text
fn rejection_response(rejection: JsonRejection) -> Response {
    tracing::debug!(error = %rejection, "rejected request body");
    ErrorResponse::new(rejection.status(), rejection.body_text())
}

/// POST /api/calculate
pub async fn calculate(
    State(state): State<AppState>,
    payload: Result<Json<CalculateRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return rejection_response(rejection),
    };

    let catalog = state.catalog.snapshot();
    match calculate::calculate(&catalog, request) {
        Ok(response) => Json(response).into_response(),
        Err(e) => e.into_response(),
    }
}

/// POST /api/dilute
pub async fn dilute(payload: Result<Json<DiluteRequest>, JsonRejection>) -> Response {
    match payload {
        Ok(Json(request)) => calculate::dilute(request).map(Json).into_response(),
        Err(rejection) => rejection_response(rejection),
    }
}
