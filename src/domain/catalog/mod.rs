//! Product catalog
//!
//! Read-only after construction. The cart checks every product id and stock bound
//! against this registry.

use serde::Serialize;
use std::collections::HashSet;
use crate::domain::aggregates::Product;
use crate::domain::value_objects::Money;
use crate::{EcommerceError, Result};

const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/200";

#[derive(Clone, Debug)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Result<Self> {
        let mut seen = HashSet::new();
        for p in &products {
            if !seen.insert(p.id()) { return Err(EcommerceError::DuplicateProduct(p.id().to_string())); }
        }
        Ok(Self { products })
    }

    /// The store's built-in catalog.
    pub fn demo() -> Result<Self> {
        Self::new(vec![
            Product::physical("1", "Physical Book", Money::from_cents(999), 0.5, 10)?,
            Product::digital("2", "E-book", Money::from_cents(499), "https://example.com/ebook-download", 100)?,
        ])
    }

    pub fn get_product(&self, product_id: &str) -> Result<&Product> {
        self.products.iter().find(|p| p.id() == product_id).ok_or_else(|| EcommerceError::ProductNotFound(product_id.to_string()))
    }

    pub fn products(&self) -> &[Product] { &self.products }
    pub fn len(&self) -> usize { self.products.len() }
    pub fn is_empty(&self) -> bool { self.products.is_empty() }
}

/// Storefront card shown on the landing page. Not tied to catalog stock.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Listing {
    pub name: &'static str,
    pub price: Money,
    pub image: &'static str,
}

pub fn featured_listings() -> [Listing; 3] {
    [
        Listing { name: "Laptop", price: Money::from_cents(99999), image: PLACEHOLDER_IMAGE },
        Listing { name: "Phone", price: Money::from_cents(49999), image: PLACEHOLDER_IMAGE },
        Listing { name: "Headphones", price: Money::from_cents(19999), image: PLACEHOLDER_IMAGE },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_catalog_lookup() {
        let catalog = Catalog::demo().unwrap();
        assert_eq!(catalog.len(), 2);
        let book = catalog.get_product("1").unwrap();
        assert_eq!(book.name(), "Physical Book");
        assert_eq!(book.quantity_available(), 10);
        assert_eq!(catalog.get_product("2").unwrap().quantity_available(), 100);
    }

    #[test]
    fn test_unknown_product() {
        let catalog = Catalog::demo().unwrap();
        assert_eq!(catalog.get_product("prod1").unwrap_err(), EcommerceError::ProductNotFound("prod1".into()));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let a = Product::physical("1", "A", Money::from_cents(100), 1.0, 1).unwrap();
        let b = Product::digital("1", "B", Money::from_cents(200), "https://example.com/b", 1).unwrap();
        assert_eq!(Catalog::new(vec![a, b]).unwrap_err(), EcommerceError::DuplicateProduct("1".into()));
    }

    #[test]
    fn test_featured_listings_are_fixed() {
        let listings = featured_listings();
        assert_eq!(listings.len(), 3);
        assert_eq!(listings[0].name, "Laptop");
        assert_eq!(serde_json::to_value(&listings[2]).unwrap()["price"], serde_json::json!(199.99));
    }
}
