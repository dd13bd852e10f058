//! Domain layer: products, catalog, cart and the events the cart raises.
pub mod aggregates;
pub mod catalog;
pub mod events;
pub mod value_objects;
