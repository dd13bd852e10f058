//! HTTP error rendering.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use validator::ValidationErrors;
use crate::EcommerceError;

pub const PRODUCT_NOT_FOUND: &str = "Product not found";
pub const NOT_ENOUGH_STOCK: &str = "Not enough stock";
pub const EXCEEDS_STOCK: &str = "Exceeds stock";

/// Failure of an `/api` route, rendered as `{"success": false, "message": ...}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::NotFound(m) | Self::BadRequest(m) => m,
        }
    }

    /// Maps a domain error, using `stock_message` for stock-bound rejections.
    pub fn from_domain(err: EcommerceError, stock_message: &str) -> Self {
        match err {
            EcommerceError::ProductNotFound(id) => {
                tracing::debug!(product_id = %id, "unknown product");
                Self::NotFound(PRODUCT_NOT_FOUND.into())
            }
            EcommerceError::InsufficientStock { product_id, requested, available } => {
                tracing::warn!(product_id = %product_id, requested, available, "stock bound exceeded");
                Self::BadRequest(stock_message.into())
            }
            other => Self::BadRequest(other.to_string()),
        }
    }
}

impl From<EcommerceError> for ApiError {
    fn from(err: EcommerceError) -> Self { Self::from_domain(err, NOT_ENOUGH_STOCK) }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self { Self::BadRequest(rejection.body_text()) }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self { Self::BadRequest(errors.to_string()) }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({"success": false, "message": self.message()}))).into_response()
    }
}

/// Failure of a `/cart` route, rendered as `{"status": "error", "message": ...}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegacyError(pub ApiError);

impl<E: Into<ApiError>> From<E> for LegacyError {
    fn from(err: E) -> Self { Self(err.into()) }
}

impl IntoResponse for LegacyError {
    fn into_response(self) -> Response {
        (self.0.status(), Json(json!({"status": "error", "message": self.0.message()}))).into_response()
    }
}
