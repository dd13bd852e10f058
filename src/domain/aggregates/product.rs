//! Product Aggregate

use serde::Serialize;
use crate::domain::value_objects::Money;
use crate::{EcommerceError, Result};

/// A catalog entry.
///
/// Serializes flat, with the variant's payload next to the common fields:
/// `{"product_id", "name", "type", "price", "weight" | "download_link", "quantity_available"}`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Product {
    product_id: String,
    name: String,
    #[serde(flatten)]
    kind: ProductKind,
    price: Money,
    quantity_available: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ProductKind {
    Physical { weight: f64 },
    Digital { download_link: String },
}

impl Product {
    pub fn create(product_id: impl Into<String>, name: impl Into<String>, kind: ProductKind, price: Money, quantity_available: u32) -> Result<Self> {
        let product_id = product_id.into();
        if product_id.trim().is_empty() { return Err(EcommerceError::InvalidProduct("empty product id".into())); }
        if price.is_negative() { return Err(EcommerceError::InvalidProduct(format!("negative price for {product_id}"))); }
        Ok(Self { product_id, name: name.into(), kind, price, quantity_available })
    }

    pub fn physical(product_id: impl Into<String>, name: impl Into<String>, price: Money, weight: f64, quantity_available: u32) -> Result<Self> {
        Self::create(product_id, name, ProductKind::Physical { weight }, price, quantity_available)
    }

    pub fn digital(product_id: impl Into<String>, name: impl Into<String>, price: Money, download_link: impl Into<String>, quantity_available: u32) -> Result<Self> {
        Self::create(product_id, name, ProductKind::Digital { download_link: download_link.into() }, price, quantity_available)
    }

    pub fn id(&self) -> &str { &self.product_id }
    pub fn name(&self) -> &str { &self.name }
    pub fn kind(&self) -> &ProductKind { &self.kind }
    pub fn price(&self) -> Money { self.price }
    pub fn quantity_available(&self) -> u32 { self.quantity_available }
}
