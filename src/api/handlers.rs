//! Route handlers.

use axum::extract::{Path, Query, State};
use axum::http::header;
use axum::response::{Html, IntoResponse};
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use validator::Validate;
use super::error::{ApiError, LegacyError, EXCEEDS_STOCK};
use super::extract::{OptionalJson, ValidatedJson};
use crate::domain::aggregates::{CartLine, Product};
use crate::domain::catalog::{featured_listings, Listing};
use crate::domain::value_objects::Money;
use crate::state::AppState;

pub const SERVICE_NAME: &str = "opensase-cart";

const INDEX_HTML: &str = include_str!("../../static/index.html");
const SCRIPT_JS: &str = include_str!("../../static/js/script.js");

fn default_quantity() -> u32 { 1 }

#[derive(Debug, Deserialize, Validate)]
pub struct AddItemBody {
    #[serde(default = "default_quantity")]
    #[validate(range(min = 1))]
    pub quantity: u32,
}

impl Default for AddItemBody {
    fn default() -> Self { Self { quantity: default_quantity() } }
}

#[derive(Debug, Deserialize, Validate)]
pub struct AddToCartRequest {
    #[validate(length(min = 1))]
    pub product_id: String,
    #[serde(default = "default_quantity")]
    #[validate(range(min = 1))]
    pub quantity: u32,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCartRequest {
    #[validate(length(min = 1))]
    pub product_id: String,
    pub quantity: u32,
}

/// `/api/cart` line: `{product_details, quantity, subtotal}`.
#[derive(Debug, Serialize)]
pub struct CartLineView {
    pub product_details: Product,
    pub quantity: u32,
    pub subtotal: Money,
}

impl From<CartLine> for CartLineView {
    fn from(l: CartLine) -> Self {
        Self { product_details: l.product, quantity: l.quantity, subtotal: l.subtotal }
    }
}

#[derive(Debug, Serialize)]
pub struct CartView {
    pub items: Vec<CartLineView>,
    pub total: Money,
}

fn success() -> Json<Value> { Json(json!({"success": true})) }

pub async fn index() -> Html<&'static str> { Html(INDEX_HTML) }

pub async fn script() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/javascript; charset=utf-8")], SCRIPT_JS)
}

pub async fn health(State(s): State<AppState>) -> Json<Value> {
    let uptime = (Utc::now() - s.started_at).num_seconds().max(0);
    Json(json!({
        "status": "healthy",
        "service": SERVICE_NAME,
        "started_at": s.started_at.to_rfc3339(),
        "uptime_seconds": uptime,
    }))
}

pub async fn list_featured() -> Json<[Listing; 3]> { Json(featured_listings()) }

pub async fn list_catalog(State(s): State<AppState>) -> Json<Vec<Product>> {
    Json(s.store.catalog().products().to_vec())
}

pub async fn get_catalog_product(State(s): State<AppState>, Path(product_id): Path<String>) -> Result<Json<Product>, ApiError> {
    Ok(Json(s.store.catalog().get_product(&product_id)?.clone()))
}

/// Lines serialize as `{product, quantity, subtotal}`.
pub async fn list_cart_items(State(s): State<AppState>) -> Json<Vec<CartLine>> {
    Json(s.store.snapshot().await.lines)
}

pub async fn add_cart_item(
    State(s): State<AppState>,
    Path(product_id): Path<String>,
    OptionalJson(body): OptionalJson<AddItemBody>,
) -> Result<Json<Value>, LegacyError> {
    s.store.add(&product_id, body.quantity).await?;
    Ok(Json(json!({"status": "success", "message": "Item added to cart"})))
}

pub async fn get_cart(State(s): State<AppState>) -> Json<CartView> {
    let snapshot = s.store.snapshot().await;
    Json(CartView { items: snapshot.lines.into_iter().map(CartLineView::from).collect(), total: snapshot.total })
}

pub async fn add_to_cart(State(s): State<AppState>, ValidatedJson(r): ValidatedJson<AddToCartRequest>) -> Result<Json<Value>, ApiError> {
    s.store.add(&r.product_id, r.quantity).await?;
    Ok(success())
}

pub async fn update_cart(State(s): State<AppState>, ValidatedJson(r): ValidatedJson<UpdateCartRequest>) -> Result<Json<Value>, ApiError> {
    s.store.set_quantity(&r.product_id, r.quantity).await.map_err(|e| ApiError::from_domain(e, EXCEEDS_STOCK))?;
    Ok(success())
}

/// Takes the first `product_id` pair; any other query shape is a no-op.
pub async fn remove_from_cart(State(s): State<AppState>, Query(pairs): Query<Vec<(String, String)>>) -> Json<Value> {
    if let Some((_, product_id)) = pairs.into_iter().find(|(k, _)| k == "product_id") {
        s.store.remove(&product_id).await;
    }
    success()
}

pub async fn clear_cart(State(s): State<AppState>) -> Json<Value> {
    s.store.clear().await;
    success()
}
