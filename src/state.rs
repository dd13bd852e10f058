//! Application state shared by every handler.

use chrono::{DateTime, Utc};
use std::sync::Arc;
use crate::domain::catalog::Catalog;
use crate::store::CartStore;

#[derive(Clone, Debug)]
pub struct AppState {
    pub store: Arc<CartStore>,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        Self { store: Arc::new(CartStore::new(catalog)), started_at: Utc::now() }
    }

    /// State backed by the built-in catalog.
    pub fn demo() -> crate::Result<Self> { Ok(Self::new(Catalog::demo()?)) }
}
