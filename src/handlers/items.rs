//! Item CRUD handlers.

use axum::Json;
use axum::extract::{FromRequest, Request, State};
use axum::http::StatusCode;

use super::error::ApiError;
use super::extract::{ItemIdPath, JsonBody};
use crate::item::{Item, ItemFields};
use crate::server::AppState;

/// GET /items
pub async fn list_items(State(state): State<AppState>) -> Result<Json<Vec<Item>>, ApiError> {
    Ok(Json(state.items.list().await?))
}

/// GET /items/{id}
pub async fn get_item(
    State(state): State<AppState>,
    ItemIdPath(id): ItemIdPath,
) -> Result<Json<Item>, ApiError> {
    Ok(Json(state.items.get(id).await?))
}

/// POST /items
pub async fn create_item(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    let fields = ItemFields::from_json(&body)?;
    let item = state.items.create(fields).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// PUT /items/{id}
///
/// An unknown id is reported before the body is looked at.
pub async fn update_item(
    State(state): State<AppState>,
    ItemIdPath(id): ItemIdPath,
    request: Request,
) -> Result<Json<Item>, ApiError> {
    state.items.get(id).await?;

    let JsonBody(body) = JsonBody::from_request(request, &state).await?;
    let fields = ItemFields::from_json(&body)?;
    Ok(Json(state.items.update(id, fields).await?))
}

/// DELETE /items/{id}
pub async fn delete_item(
    State(state): State<AppState>,
    ItemIdPath(id): ItemIdPath,
) -> Result<Json<Item>, ApiError> {
    Ok(Json(state.items.delete(id).await?))
}
