//! Aggregates module
pub mod product;
pub mod cart;

pub use product::{Product, ProductKind};
pub use cart::{Cart, CartLine};
