//! HTTP surface: routes, middleware and error rendering.

pub mod error;
pub mod extract;
pub mod handlers;

use axum::http::Request;
use axum::routing::{delete, get, post, put};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer};
use tower_http::trace::TraceLayer;
use uuid::Uuid;
use crate::state::AppState;

pub use error::{ApiError, LegacyError};

/// Stamps each request with a time-ordered UUID in `x-request-id`.
#[derive(Clone, Copy, Debug, Default)]
pub struct MakeRequestUuidV7;

impl MakeRequestId for MakeRequestUuidV7 {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        Uuid::now_v7().to_string().parse().ok().map(RequestId::new)
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/static/js/script.js", get(handlers::script))
        .route("/health", get(handlers::health))
        .route("/api/products", get(handlers::list_featured))
        .route("/api/catalog", get(handlers::list_catalog))
        .route("/api/catalog/:product_id", get(handlers::get_catalog_product))
        .route("/cart/items", get(handlers::list_cart_items))
        .route("/cart/add/:product_id", post(handlers::add_cart_item))
        .route("/api/cart", get(handlers::get_cart).delete(handlers::clear_cart))
        .route("/api/cart/add", post(handlers::add_to_cart))
        .route("/api/cart/update", put(handlers::update_cart))
        .route("/api/cart/remove", delete(handlers::remove_from_cart))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
