use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;

use super::AppState;
use crate::tools::spirits;

/// GET /api/spirits
pub async fn list_spirits(State(state): State<AppState>) -> impl IntoResponse {
    let catalog = state.catalog.snapshot();
    Json(spirits::list_spirits(&catalog))
}

/// GET /api/spirits/{category}
pub async fn get_spirits(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> impl IntoResponse {
    let catalog = state.catalog.snapshot();
    spirits::get_spirits(&catalog, &category).map(Json)
}
