//! One-shot catalog loader.
//!
//! The storefront starts immediately with the catalog in `Loading`. A
//! background task performs the single fetch and swaps in `Ready` or
//! `Failed` when it completes.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use quickcart_core::{CatalogState, Product, ProductId};
use tokio::task::JoinHandle;
use tracing::{error, info};

use super::CatalogClient;

/// Shared catalog state plus the guard that keeps the fetch to one per process.
#[derive(Clone, Default)]
pub struct CatalogLoader {
    inner: Arc<CatalogLoaderInner>,
}

#[derive(Default)]
struct CatalogLoaderInner {
    state: RwLock<CatalogState>,
    started: AtomicBool,
}

impl CatalogLoader {
    /// Create a loader in the `Loading` state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn the background fetch.
    ///
    /// Only the first call spawns a task and returns its handle. Later calls
    /// return `None` and leave the state alone.
    pub fn start(&self, client: CatalogClient) -> Option<JoinHandle<()>> {
        if self.inner.started.swap(true, Ordering::AcqRel) {
            return None;
        }

        info!(endpoint = %client.endpoint(), "Spawning catalog fetch task");
        let loader = self.clone();
        Some(tokio::spawn(async move {
            let next = match client.fetch_products().await {
                Ok(products) => {
                    info!(count = products.len(), "Catalog loaded");
                    CatalogState::from(products)
                }
                Err(e) => {
                    error!(error = %e, "Failed to load catalog");
                    CatalogState::Failed
                }
            };
            loader.set(next);
        }))
    }

    /// Whether `start` has already been called.
    #[must_use]
    pub fn is_started(&self) -> bool {
        self.inner.started.load(Ordering::Acquire)
    }

    /// The current catalog state.
    #[must_use]
    pub fn state(&self) -> CatalogState {
        self.inner
            .state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Find a product in the loaded catalog.
    #[must_use]
    pub fn find(&self, id: ProductId) -> Option<Product> {
        self.inner
            .state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .find(id)
            .cloned()
    }

    /// Replace the state. Used by the fetch task and by tests that need a
    /// settled catalog without a network round trip.
    pub fn set(&self, state: CatalogState) {
        *self
            .inner
            .state
            .write()
            .unwrap_or_else(PoisonError::into_inner) = state;
    }
}

impl std::fmt::Debug for CatalogLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogLoader")
            .field("started", &self.is_started())
            .field("state", &self.state())
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use url::Url;

    use super::*;
    use crate::config::CatalogConfig;

    fn client_for(server: &mockito::Server) -> CatalogClient {
        let config = CatalogConfig {
            url: Url::parse(&format!("{}/products", server.url())).unwrap(),
        };
        CatalogClient::new(&config).unwrap()
    }

    #[tokio::test]
    async fn test_loading_then_ready() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/products")
            .with_status(200)
            .with_body(
                r#"[{"id": 3, "title": "Mens Cotton Jacket", "price": 55.99,
                     "description": "", "category": "men's clothing", "image": ""}]"#,
            )
            .create_async()
            .await;

        let loader = CatalogLoader::new();
        assert!(loader.state().is_loading());

        loader.start(client_for(&server)).unwrap().await.unwrap();

        let state = loader.state();
        assert!(state.is_ready());
        assert_eq!(loader.find(ProductId::new(3)).unwrap().title, "Mens Cotton Jacket");
        assert!(loader.find(ProductId::new(4)).is_none());
    }

    #[tokio::test]
    async fn test_loading_then_failed() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/products")
            .with_status(502)
            .create_async()
            .await;

        let loader = CatalogLoader::new();
        loader.start(client_for(&server)).unwrap().await.unwrap();

        assert_eq!(loader.state(), CatalogState::Failed);
        assert!(loader.find(ProductId::new(1)).is_none());
    }

    #[tokio::test]
    async fn test_start_fetches_only_once() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/products")
            .with_status(200)
            .with_body("[]")
            .expect(1)
            .create_async()
            .await;

        let loader = CatalogLoader::new();
        let client = client_for(&server);

        let first = loader.start(client.clone());
        assert!(loader.start(client.clone()).is_none());
        first.unwrap().await.unwrap();
        assert!(loader.start(client).is_none());

        assert!(loader.is_started());
        assert_eq!(loader.state().products().map(<[Product]>::len), Some(0));
        mock.assert_async().await;
    }
}
