//! Application state shared across handlers.

use std::sync::Arc;

use crate::cart_store::CartStore;
use crate::catalog::Catalog;
use crate::config::StorefrontConfig;

/// State handed to every handler.
///
/// Handlers reach a visitor's cart through [`crate::middleware::SessionCart`]
/// rather than the store directly.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: Catalog,
    carts: CartStore,
}

impl AppState {
    #[must_use]
    pub fn new(config: StorefrontConfig, catalog: Catalog) -> Self {
        let carts = CartStore::new(config.session_ttl());
        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                carts,
            }),
        }
    }

    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    #[must_use]
    pub fn carts(&self) -> &CartStore {
        &self.inner.carts
    }
}
