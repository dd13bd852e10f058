//! Cart store
//!
//! Owns the catalog and the cart for the lifetime of the server. Each operation takes
//! the cart lock once and holds it across its whole read-check-write sequence.

use tokio::sync::Mutex;
use crate::domain::aggregates::{Cart, CartLine};
use crate::domain::catalog::Catalog;
use crate::domain::events::CartEvent;
use crate::domain::value_objects::Money;
use crate::Result;

#[derive(Debug)]
pub struct CartStore {
    catalog: Catalog,
    cart: Mutex<Cart>,
}

/// Consistent view of the cart taken under a single lock.
#[derive(Clone, Debug, PartialEq)]
pub struct CartSnapshot {
    pub lines: Vec<CartLine>,
    pub total: Money,
}

impl CartStore {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog, cart: Mutex::new(Cart::new()) }
    }

    pub fn catalog(&self) -> &Catalog { &self.catalog }

    pub async fn add(&self, product_id: &str, quantity: u32) -> Result<u32> {
        let mut cart = self.cart.lock().await;
        let outcome = cart.add(&self.catalog, product_id, quantity);
        publish(&mut cart);
        outcome
    }

    pub async fn set_quantity(&self, product_id: &str, quantity: u32) -> Result<()> {
        let mut cart = self.cart.lock().await;
        let outcome = cart.set_quantity(&self.catalog, product_id, quantity);
        publish(&mut cart);
        outcome
    }

    pub async fn remove(&self, product_id: &str) -> bool {
        let mut cart = self.cart.lock().await;
        let removed = cart.remove(product_id);
        publish(&mut cart);
        removed
    }

    pub async fn clear(&self) {
        let mut cart = self.cart.lock().await;
        cart.clear();
        publish(&mut cart);
    }

    pub async fn snapshot(&self) -> CartSnapshot {
        let cart = self.cart.lock().await;
        CartSnapshot { lines: cart.lines(&self.catalog), total: cart.total(&self.catalog) }
    }
}

fn publish(cart: &mut Cart) {
    for event in cart.take_events() {
        match &event {
            CartEvent::ItemAdded { product_id, quantity, cart_quantity } => {
                tracing::info!(product_id = %product_id, quantity, cart_quantity, "cart item added")
            }
            CartEvent::QuantitySet { product_id, quantity } => {
                tracing::info!(product_id = %product_id, quantity, "cart quantity set")
            }
            CartEvent::ItemRemoved { product_id } => tracing::info!(product_id = %product_id, "cart item removed"),
            CartEvent::Cleared { lines } => tracing::info!(lines, "cart cleared"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EcommerceError;
    use std::sync::Arc;

    fn store() -> CartStore { CartStore::new(Catalog::demo().unwrap()) }

    #[tokio::test]
    async fn test_snapshot_totals() {
        let store = store();
        store.add("1", 2).await.unwrap();
        store.add("2", 1).await.unwrap();
        let snap = store.snapshot().await;
        assert_eq!(snap.lines.len(), 2);
        assert_eq!(snap.total, Money::from_cents(2497));
    }

    #[tokio::test]
    async fn test_rejected_add_keeps_previous_quantity() {
        let store = store();
        store.add("1", 10).await.unwrap();
        assert!(matches!(store.add("1", 1).await, Err(EcommerceError::InsufficientStock { .. })));
        assert_eq!(store.snapshot().await.lines[0].quantity, 10);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_adds_never_exceed_stock() {
        let store = Arc::new(store());
        let tasks: Vec<_> = (0..50).map(|_| {
            let store = store.clone();
            tokio::spawn(async move { store.add("1", 1).await.is_ok() })
        }).collect();
        let mut accepted = 0;
        for t in tasks {
            if t.await.unwrap() { accepted += 1; }
        }
        assert_eq!(accepted, 10);
        assert_eq!(store.snapshot().await.lines[0].quantity, 10);
    }

    #[tokio::test]
    async fn test_remove_and_clear() {
        let store = store();
        assert!(!store.remove("1").await);
        store.add("2", 3).await.unwrap();
        store.add("1", 1).await.unwrap();
        assert!(store.remove("2").await);
        store.clear().await;
        assert!(store.snapshot().await.lines.is_empty());
    }
}
