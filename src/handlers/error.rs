//! JSON error responses.
//!
//! Every failure is reported as `{"error": "<message>"}` with the matching status.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use crate::item::FieldsError;
use crate::service::ServiceError;

pub(crate) const ROUTE_NOT_FOUND: &str = "Not found";
pub(crate) const ITEM_NOT_FOUND: &str = "Item not found";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    UnsupportedMediaType(String),

    #[error("{0}")]
    PayloadTooLarge(String),

    #[error("Request timed out")]
    RequestTimeout,

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// Response for any method/path combination the router does not serve.
    pub fn route_not_found() -> Self {
        Self::NotFound(ROUTE_NOT_FOUND.to_string())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Self::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            Self::RequestTimeout => StatusCode::REQUEST_TIMEOUT,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        (self.status(), Json(ErrorBody { error: &message })).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::NotFound(_) => Self::NotFound(ITEM_NOT_FOUND.to_string()),
            ServiceError::IdsExhausted => {
                error!("item id space exhausted");
                Self::Internal("Internal server error".to_string())
            }
            ServiceError::Storage(e) => {
                error!(error = %e, "item store failure");
                Self::Internal("Internal server error".to_string())
            }
        }
    }
}

impl From<FieldsError> for ApiError {
    fn from(e: FieldsError) -> Self {
        Self::BadRequest(e.to_string())
    }
}

/// Fallback for unmatched routes and methods.
pub async fn not_found() -> ApiError {
    ApiError::route_not_found()
}

/// Give the timeout layer's bare `408` the JSON error body.
pub async fn timeout_as_json(response: Response) -> Response {
    if response.status() == StatusCode::REQUEST_TIMEOUT {
        return ApiError::RequestTimeout.into_response();
    }
    response
}
