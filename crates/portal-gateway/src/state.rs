use std::sync::Arc;

use portal_core::KeyStore;

/// Shared state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn KeyStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn KeyStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &dyn KeyStore {
        self.store.as_ref()
    }
}
