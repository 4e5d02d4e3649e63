use std::path::PathBuf;
use std::time::Duration;

use axum::Router;
use axum::http::StatusCode;
use axum::middleware;
use axum::routing::get;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::service::ItemService;

// ============================================================================
// Application State
// ============================================================================

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub items: ItemService,
    pub public_dir: PathBuf,
}

// ============================================================================
// Server Setup
// ============================================================================

/// Build the router.
///
/// Unsupported methods on known paths fall through to the same `404 Not found`
/// as unknown paths.
pub fn build_app(state: AppState, request_timeout_seconds: u64) -> Router {
    let item_routes = Router::new()
        .route(
            "/items",
            get(handlers::list_items)
                .post(handlers::create_item)
                .fallback(handlers::not_found),
        )
        .route(
            "/items/{id}",
            get(handlers::get_item)
                .put(handlers::update_item)
                .delete(handlers::delete_item)
                .fallback(handlers::not_found),
        );

    let asset_routes = Router::new()
        .route("/", get(handlers::index).fallback(handlers::not_found))
        .route("/app.js", get(handlers::app_js).fallback(handlers::not_found));

    let ops_routes = Router::new()
        .route("/livez", get(handlers::livez).fallback(handlers::not_found))
        .route("/version", get(handlers::version).fallback(handlers::not_found));

    Router::new()
        .merge(item_routes)
        .merge(asset_routes)
        .merge(ops_routes)
        .fallback(handlers::not_found)
        .with_state(state)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(request_timeout_seconds),
        ))
        .layer(middleware::map_response(handlers::timeout_as_json))
        .layer(handlers::cors_layer())
        .layer(middleware::from_fn(handlers::preflight_no_content))
        .layer(TraceLayer::new_for_http())
}
