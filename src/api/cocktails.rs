use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;

use super::AppState;
use crate::tools::cocktails;

/// GET /api/cocktails
pub async fn list_cocktails(State(state): State<AppState>) -> impl IntoResponse {
    let catalog = state.catalog.snapshot();
    Json(cocktails::list_cocktails(&catalog))
}

/// GET /api/cocktails/{id}
pub async fn get_cocktail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let catalog = state.catalog.snapshot();
    cocktails::get_cocktail(&catalog, &id).map(Json)
}
