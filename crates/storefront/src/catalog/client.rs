//! HTTP client for the remote product catalog.
//!
//! Uses `reqwest` with its default policies. No timeout and no retries are
//! configured: a fetch runs until it succeeds or fails.

use std::sync::Arc;

use quickcart_core::Product;
use tracing::{debug, instrument};
use url::Url;

use super::CatalogError;
use crate::config::CatalogConfig;

/// Client for the product catalog endpoint.
///
/// Cheaply cloneable via `Arc`.
#[derive(Clone)]
pub struct CatalogClient {
    inner: Arc<CatalogClientInner>,
}

struct CatalogClientInner {
    client: reqwest::Client,
    endpoint: Url,
}

impl std::fmt::Debug for CatalogClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogClient")
            .field("endpoint", &self.inner.endpoint.as_str())
            .finish_non_exhaustive()
    }
}

impl CatalogClient {
    /// Create a new catalog client.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Http` if the HTTP client cannot be constructed.
    pub fn new(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("quickcart-storefront/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            inner: Arc::new(CatalogClientInner {
                client,
                endpoint: config.url.clone(),
            }),
        })
    }

    /// The configured catalog endpoint.
    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.inner.endpoint
    }

    /// Fetch the full product list.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` on transport failure, a non-2xx status, or a
    /// body that is not a JSON array of products.
    #[instrument(skip(self), fields(endpoint = %self.inner.endpoint))]
    pub async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
        let response = self
            .inner
            .client
            .get(self.inner.endpoint.clone())
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();

        // Get response body as text first for better error diagnostics
        let response_text = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                status = %status,
                body = %response_text.chars().take(500).collect::<String>(),
                "Catalog endpoint returned non-success status"
            );
            return Err(CatalogError::Status(status));
        }

        let products: Vec<Product> = match serde_json::from_str(&response_text) {
            Ok(products) => products,
            Err(e) => {
                tracing::error!(
                    error = %e,
                    body = %response_text.chars().take(500).collect::<String>(),
                    "Failed to parse catalog response"
                );
                return Err(CatalogError::Parse(e));
            }
        };

        debug!(count = products.len(), "Fetched catalog");
        Ok(products)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    const PRODUCTS_JSON: &str = r#"[
        {
            "id": 1,
            "title": "Fjallraven - Foldsack No. 1 Backpack",
            "price": 109.95,
            "description": "Your perfect pack for everyday use",
            "category": "men's clothing",
            "image": "https://fakestoreapi.com/img/1.jpg",
            "rating": { "rate": 3.9, "count": 120 }
        },
        {
            "id": 2,
            "title": "Mens Casual Premium Slim Fit T-Shirts",
            "price": 22.3,
            "description": "Slim-fitting style",
            "category": "men's clothing",
            "image": "https://fakestoreapi.com/img/2.jpg"
        }
    ]"#;

    fn client_for(server: &mockito::Server) -> CatalogClient {
        let config = CatalogConfig {
            url: Url::parse(&format!("{}/products", server.url())).unwrap(),
        };
        CatalogClient::new(&config).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_products_success() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/products")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(PRODUCTS_JSON)
            .expect(1)
            .create_async()
            .await;

        let products = client_for(&server).fetch_products().await.unwrap();

        assert_eq!(products.len(), 2);
        assert_eq!(products[0].title, "Fjallraven - Foldsack No. 1 Backpack");
        assert_eq!(products[1].price.to_string(), "$22.30");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_fetch_products_server_error() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/products")
            .with_status(500)
            .with_body("boom")
            .expect(1)
            .create_async()
            .await;

        let err = client_for(&server).fetch_products().await.unwrap_err();

        assert!(matches!(err, CatalogError::Status(s) if s.as_u16() == 500));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_fetch_products_malformed_json() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/products")
            .with_status(200)
            .with_body("[{\"id\": 1,")
            .create_async()
            .await;

        let err = client_for(&server).fetch_products().await.unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[tokio::test]
    async fn test_fetch_products_wrong_shape() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/products")
            .with_status(200)
            .with_body(r#"{"products": []}"#)
            .create_async()
            .await;

        let err = client_for(&server).fetch_products().await.unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[tokio::test]
    async fn test_fetch_products_connection_refused() {
        let config = CatalogConfig {
            // Port 9 (discard) is not expected to accept HTTP connections
            url: Url::parse("http://127.0.0.1:9/products").unwrap(),
        };
        let err = CatalogClient::new(&config)
            .unwrap()
            .fetch_products()
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::Http(_)));
    }
}
