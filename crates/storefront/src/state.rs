//! Application state shared across handlers.

use std::sync::Arc;

use quickcart_core::CartStore;

use crate::catalog::{CatalogClient, CatalogError, CatalogLoader};
use crate::config::StorefrontConfig;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// catalog, the cart, and configuration.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    client: CatalogClient,
    catalog: CatalogLoader,
    cart: CartStore,
}

impl AppState {
    /// Create a new application state with an empty cart and a catalog in
    /// the `Loading` state.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog HTTP client cannot be built.
    pub fn new(config: StorefrontConfig) -> Result<Self, CatalogError> {
        let client = CatalogClient::new(&config.catalog)?;

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                client,
                catalog: CatalogLoader::new(),
                cart: CartStore::new(),
            }),
        })
    }

    /// Start the one-time catalog fetch in the background.
    ///
    /// Calling this more than once has no effect.
    pub fn start_catalog_loading(&self) -> Option<tokio::task::JoinHandle<()>> {
        self.inner.catalog.start(self.inner.client.clone())
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the catalog loader.
    #[must_use]
    pub fn catalog(&self) -> &CatalogLoader {
        &self.inner.catalog
    }

    /// Get a reference to the cart store.
    #[must_use]
    pub fn cart(&self) -> &CartStore {
        &self.inner.cart
    }
}
