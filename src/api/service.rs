//! Service-level endpoints: descriptor, presets, status and catalog reload

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use super::AppState;
use crate::build_info::{NAME, VERSION};
use crate::tools::presets;
use crate::tools::ToolError;

const ENDPOINTS: &[&str] = &[
    "GET /api/cocktails",
    "GET /api/cocktails/{id}",
    "GET /api/spirits",
    "GET /api/spirits/{category}",
    "POST /api/calculate",
    "POST /api/dilute",
    "GET /api/presets",
    "GET /api/status",
    "POST /api/reload",
];

#[derive(Debug, Serialize)]
pub struct ServiceDescriptor {
    pub name: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub endpoints: &'static [&'static str],
}

/// GET /
pub async fn index() -> Json<ServiceDescriptor> {
    Json(ServiceDescriptor {
        name: "The Freezer Door API",
        service: NAME,
        version: VERSION,
        endpoints: ENDPOINTS,
    })
}

/// GET /api/presets
pub async fn list_presets() -> impl IntoResponse {
    Json(presets::list_presets())
}

/// GET /api/status
pub async fn status(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.status.get_status(&state.catalog))
}

/// POST /api/reload
pub async fn reload(State(state): State<AppState>) -> impl IntoResponse {
    state
        .catalog
        .reload()
        .map(Json)
        .map_err(ToolError::from)
}
