//! Static frontend assets.

use std::path::Path;

use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use tokio::fs;
use tracing::error;

use super::error::ApiError;
use crate::server::AppState;

const INDEX_HTML: &str = "index.html";
const APP_JS: &str = "app.js";

/// GET /
pub async fn index(State(state): State<AppState>) -> Result<Response, ApiError> {
    serve_asset(&state.public_dir, INDEX_HTML, "text/html; charset=utf-8").await
}

/// GET /app.js
pub async fn app_js(State(state): State<AppState>) -> Result<Response, ApiError> {
    serve_asset(&state.public_dir, APP_JS, "application/javascript").await
}

async fn serve_asset(
    public_dir: &Path,
    file: &str,
    content_type: &'static str,
) -> Result<Response, ApiError> {
    let path = public_dir.join(file);
    let contents = fs::read(&path).await.map_err(|e| {
        error!(path = %path.display(), error = %e, "failed to read static asset");
        ApiError::Internal(format!("Failed to load {file}"))
    })?;

    Ok(([(header::CONTENT_TYPE, content_type)], contents).into_response())
}
