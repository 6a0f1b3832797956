//! HTTP API
//!
//! Thin axum handlers over the tool functions. Every error leaves as `{"error": "..."}`.

pub mod calculate;
pub mod cocktails;
pub mod service;
pub mod spirits;

use std::path::Path;
use std::sync::Arc;

use axum::extract::{MatchedPath, Request};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::Span;

use crate::catalog::CatalogStore;
use crate::tools::status::StatusTracker;
use crate::tools::ToolError;

/// State shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: CatalogStore,
    pub status: Arc<StatusTracker>,
}

impl AppState {
    pub fn new(catalog: CatalogStore) -> Self {
        Self {
            catalog,
            status: Arc::new(StatusTracker::new()),
        }
    }
}

/// Shared error response used by all endpoints
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(status: StatusCode, error: impl Into<String>) -> Response {
        (
            status,
            Json(ErrorResponse {
                error: error.into(),
            }),
        )
            .into_response()
    }
}

impl IntoResponse for ToolError {
    fn into_response(self) -> Response {
        let status = if self.is_client_error() {
            StatusCode::BAD_REQUEST
        } else if self.is_not_found() {
            StatusCode::NOT_FOUND
        } else {
            tracing::error!(error = %self, "request failed");
            StatusCode::INTERNAL_SERVER_ERROR
        };
        ErrorResponse::new(status, self.to_string())
    }
}

/// Build the application router
///
/// Paths outside the API fall back to `static_dir` when one is given.
pub fn router(state: AppState, static_dir: Option<&Path>) -> Router {
    let api = Router::new()
        .route("/", get(service::index))
        .route("/api/cocktails", get(cocktails::list_cocktails))
        .route("/api/cocktails/{id}", get(cocktails::get_cocktail))
        .route("/api/spirits", get(spirits::list_spirits))
        .route("/api/spirits/{category}", get(spirits::get_spirits))
        .route("/api/calculate", post(calculate::calculate))
        .route("/api/dilute", post(calculate::dilute))
        .route("/api/presets", get(service::list_presets))
        .route("/api/status", get(service::status))
        .route("/api/reload", post(service::reload))
        .with_state(state);

    let app = match static_dir {
        Some(dir) => api.fallback_service(ServeDir::new(dir)),
        None => api,
    };

    app.layer(CorsLayer::permissive()).layer(
        TraceLayer::new_for_http()
            .make_span_with(|request: &Request<_>| {
                let matched_path = request
                    .extensions()
                    .get::<MatchedPath>()
                    .map(MatchedPath::as_str)
                    .unwrap_or(request.uri().path());

                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    path = %matched_path,
                )
            })
            .on_request(|_request: &Request<_>, _span: &Span| {})
            .on_response(
                |response: &Response<_>, latency: std::time::Duration, _span: &Span| {
                    tracing::info!(
                        status = %response.status().as_u16(),
                        latency_ms = %latency.as_millis(),
                        "request completed"
                    );
                },
            ),
    )
}
