use std::path::Path;

use axum::{
    extract::Extension,
    http::{header, Uri},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use tower_http::services::ServeDir;

use crate::server::app::AxumAppState;
use crate::server::error::ApiError;

const API_NOT_FOUND: &str = "API endpoint not found";

/// Attach frontend routes to `router`.
///
/// With a frontend directory: `/static/*` serves files from it, and `/` plus
/// any other non-API path falls back to `index.html` (SPA routing).
/// Without one: `/` reports that the API is running.
pub fn mount(router: Router, frontend_dir: &Path) -> Router {
    if frontend_dir.is_dir() {
        tracing::info!(dir = %frontend_dir.display(), "Serving frontend");
        router
            .nest_service("/static", ServeDir::new(frontend_dir))
            .route("/", get(serve_index))
            .fallback(spa_fallback)
    } else {
        tracing::warn!(dir = %frontend_dir.display(), "Frontend directory not found, serving API only");
        router.route("/", get(api_root)).fallback(not_found)
    }
}

async fn serve_index(Extension(state): Extension<AxumAppState>) -> Response {
    match read_index(&state.frontend_dir).await {
        Some(content) => content.into_response(),
        None => Json(json!({
            "message": "Frontend index.html not found",
            "directory": state.frontend_dir.display().to_string(),
        }))
        .into_response(),
    }
}

/// SPA fallback: unknown API paths are 404, everything else gets index.html
async fn spa_fallback(Extension(state): Extension<AxumAppState>, uri: Uri) -> Response {
    let path = uri.path().trim_start_matches('/');

    if !path.starts_with("api/") {
        if let Some(content) = read_index(&state.frontend_dir).await {
            return content.into_response();
        }
    }

    ApiError::NotFound(API_NOT_FOUND).into_response()
}

async fn api_root() -> Json<serde_json::Value> {
    Json(json!({
        "message": "Event Intelligence Platform API",
        "status": "running",
        "version": env!("CARGO_PKG_VERSION"),
        "frontend": "not_found",
    }))
}

async fn not_found() -> ApiError {
    ApiError::NotFound("Not Found")
}

async fn read_index(frontend_dir: &Path) -> Option<impl IntoResponse> {
    let content = tokio::fs::read(frontend_dir.join("index.html")).await.ok()?;
    Some(([(header::CONTENT_TYPE, "text/html; charset=utf-8")], content))
}
