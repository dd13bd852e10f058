//! Domain events

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CartEvent {
    ItemAdded { product_id: String, quantity: u32, cart_quantity: u32 },
    QuantitySet { product_id: String, quantity: u32 },
    ItemRemoved { product_id: String },
    Cleared { lines: usize },
}
