//! OpenSASE Cart - in-memory shopping cart service
//!
//! A fixed product catalog and a single shopper's cart exposed over a JSON HTTP API.
//!
//! ## Features
//! - Catalog lookup by product id
//! - Add, update and remove cart items with stock-bound checks
//! - Cart listing with per-line subtotals and a cart total
//! - Storefront landing page

pub mod api;
pub mod config;
pub mod domain;
pub mod state;
pub mod store;

use thiserror::Error;

pub use config::Config;
pub use state::AppState;
pub use store::CartStore;

// =============================================================================
// Error Types
// =============================================================================

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EcommerceError {
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    #[error("Insufficient stock for {product_id}: requested {requested}, available {available}")]
    InsufficientStock { product_id: String, requested: u32, available: u32 },

    #[error("Invalid quantity")]
    InvalidQuantity,

    #[error("Duplicate product id: {0}")]
    DuplicateProduct(String),

    #[error("Invalid product: {0}")]
    InvalidProduct(String),
}

pub type Result<T> = std::result::Result<T, EcommerceError>;
