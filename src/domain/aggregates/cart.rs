//! Cart Aggregate
//!
//! A single implicit shopper's reservations, keyed by product id. An entry is either
//! present with a positive quantity or absent. Every mutation is validated against the
//! catalog before anything is written, so a rejected call leaves the cart untouched.

use std::collections::BTreeMap;
use serde::Serialize;
use crate::domain::aggregates::Product;
use crate::domain::catalog::Catalog;
use crate::domain::events::CartEvent;
use crate::domain::value_objects::Money;
use crate::{EcommerceError, Result};

#[derive(Clone, Debug, Default)]
pub struct Cart {
    items: BTreeMap<String, u32>,
    events: Vec<CartEvent>,
}

/// One priced cart line.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
    pub subtotal: Money,
}

impl CartLine {
    fn new(product: &Product, quantity: u32) -> Self {
        Self { product: product.clone(), quantity, subtotal: product.price().multiply(quantity) }
    }
}

impl Cart {
    pub fn new() -> Self { Self::default() }

    pub fn quantity_of(&self, product_id: &str) -> u32 { self.items.get(product_id).copied().unwrap_or(0) }
    pub fn is_empty(&self) -> bool { self.items.is_empty() }

    /// Reserves `quantity` more units, bounded by the product's stock.
    pub fn add(&mut self, catalog: &Catalog, product_id: &str, quantity: u32) -> Result<u32> {
        if quantity == 0 { return Err(EcommerceError::InvalidQuantity); }
        let product = catalog.get_product(product_id)?;
        let current = self.quantity_of(product_id);
        let available = product.quantity_available();
        let wanted = current.checked_add(quantity).filter(|q| *q <= available).ok_or_else(|| EcommerceError::InsufficientStock {
            product_id: product_id.to_string(), requested: quantity, available,
        })?;
        self.items.insert(product_id.to_string(), wanted);
        self.raise_event(CartEvent::ItemAdded { product_id: product_id.to_string(), quantity, cart_quantity: wanted });
        Ok(wanted)
    }

    /// Overwrites the reserved quantity; zero drops the entry.
    ///
    /// The bound is `quantity <= quantity_available + current`, i.e. the existing
    /// reservation counts towards the allowance.
    pub fn set_quantity(&mut self, catalog: &Catalog, product_id: &str, quantity: u32) -> Result<()> {
        let product = catalog.get_product(product_id)?;
        let current = self.quantity_of(product_id);
        let allowance = product.quantity_available().saturating_add(current);
        if quantity > allowance {
            return Err(EcommerceError::InsufficientStock { product_id: product_id.to_string(), requested: quantity, available: allowance });
        }
        if quantity == 0 {
            self.items.remove(product_id);
        } else {
            self.items.insert(product_id.to_string(), quantity);
        }
        self.raise_event(CartEvent::QuantitySet { product_id: product_id.to_string(), quantity });
        Ok(())
    }

    /// Drops the entry if present. Returns whether anything was removed.
    pub fn remove(&mut self, product_id: &str) -> bool {
        let removed = self.items.remove(product_id).is_some();
        if removed { self.raise_event(CartEvent::ItemRemoved { product_id: product_id.to_string() }); }
        removed
    }

    pub fn clear(&mut self) {
        let lines = self.items.len();
        self.items.clear();
        self.raise_event(CartEvent::Cleared { lines });
    }

    /// Lines in product id order. Ids missing from the catalog are skipped.
    pub fn lines(&self, catalog: &Catalog) -> Vec<CartLine> {
        self.items.iter()
            .filter_map(|(id, qty)| catalog.get_product(id).ok().map(|p| CartLine::new(p, *qty)))
            .collect()
    }

    pub fn total(&self, catalog: &Catalog) -> Money {
        self.lines(catalog).into_iter().map(|l| l.subtotal).sum()
    }

    pub fn take_events(&mut self) -> Vec<CartEvent> { std::mem::take(&mut self.events) }
    fn raise_event(&mut self, e: CartEvent) { self.events.push(e); }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn catalog() -> Catalog { Catalog::demo().unwrap() }

    #[test]
    fn test_add_to_empty_cart() {
        let catalog = catalog();
        let mut cart = Cart::new();
        assert_eq!(cart.add(&catalog, "1", 3).unwrap(), 3);
        let lines = cart.lines(&catalog);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].quantity, 3);
        assert_eq!(lines[0].subtotal.amount(), Decimal::new(2997, 2));
    }

    #[test]
    fn test_add_accumulates() {
        let catalog = catalog();
        let mut cart = Cart::new();
        cart.add(&catalog, "1", 4).unwrap();
        cart.add(&catalog, "1", 6).unwrap();
        assert_eq!(cart.quantity_of("1"), 10);
    }

    #[test]
    fn test_add_over_stock_leaves_cart_unchanged() {
        let catalog = catalog();
        let mut cart = Cart::new();
        cart.add(&catalog, "1", 7).unwrap();
        let err = cart.add(&catalog, "1", 4).unwrap_err();
        assert_eq!(err, EcommerceError::InsufficientStock { product_id: "1".into(), requested: 4, available: 10 });
        assert_eq!(cart.quantity_of("1"), 7);
    }

    #[test]
    fn test_add_unknown_and_zero() {
        let catalog = catalog();
        let mut cart = Cart::new();
        assert!(matches!(cart.add(&catalog, "prod1", 1), Err(EcommerceError::ProductNotFound(_))));
        assert_eq!(cart.add(&catalog, "1", 0), Err(EcommerceError::InvalidQuantity));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_add_overflow_is_insufficient_stock() {
        let catalog = catalog();
        let mut cart = Cart::new();
        cart.add(&catalog, "2", 1).unwrap();
        assert!(matches!(cart.add(&catalog, "2", u32::MAX), Err(EcommerceError::InsufficientStock { .. })));
    }

    #[test]
    fn test_set_quantity_bounds() {
        let catalog = catalog();
        let mut cart = Cart::new();
        cart.set_quantity(&catalog, "1", 10).unwrap();
        assert_eq!(cart.quantity_of("1"), 10);

        let mut fresh = Cart::new();
        assert!(matches!(fresh.set_quantity(&catalog, "1", 11), Err(EcommerceError::InsufficientStock { .. })));
        assert_eq!(fresh.quantity_of("1"), 0);
    }

    #[test]
    fn test_set_quantity_counts_current_reservation() {
        let catalog = catalog();
        let mut cart = Cart::new();
        cart.add(&catalog, "1", 5).unwrap();
        cart.set_quantity(&catalog, "1", 15).unwrap();
        assert_eq!(cart.quantity_of("1"), 15);
        assert!(cart.set_quantity(&catalog, "1", 26).is_err());
    }

    #[test]
    fn test_set_quantity_zero_removes() {
        let catalog = catalog();
        let mut cart = Cart::new();
        cart.add(&catalog, "2", 2).unwrap();
        cart.set_quantity(&catalog, "2", 0).unwrap();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_is_idempotent() {
        let catalog = catalog();
        let mut cart = Cart::new();
        cart.add(&catalog, "1", 1).unwrap();
        assert!(cart.remove("1"));
        assert!(!cart.remove("1"));
        assert!(!cart.remove("missing"));
    }

    #[test]
    fn test_total_and_events() {
        let catalog = catalog();
        let mut cart = Cart::new();
        cart.add(&catalog, "2", 2).unwrap();
        cart.add(&catalog, "1", 1).unwrap();
        assert_eq!(cart.total(&catalog), Money::from_cents(1997));
        let lines = cart.lines(&catalog);
        assert_eq!(lines[0].product.id(), "1");
        assert_eq!(cart.take_events(), vec![
            CartEvent::ItemAdded { product_id: "2".into(), quantity: 2, cart_quantity: 2 },
            CartEvent::ItemAdded { product_id: "1".into(), quantity: 1, cart_quantity: 1 },
        ]);
        assert!(cart.take_events().is_empty());
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.take_events(), vec![CartEvent::Cleared { lines: 2 }]);
    }
}
