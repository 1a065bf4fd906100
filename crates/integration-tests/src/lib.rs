//! Integration tests for QuickCart.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p quickcart-integration-tests
//! ```
//!
//! No external services are needed: the catalog endpoint is a local
//! `mockito` server and requests go straight to the in-process router.
//!
//! # Test Categories
//!
//! - `storefront_catalog` - Catalog load states as rendered by the storefront
//! - `storefront_cart` - Cart intents end to end

#![allow(clippy::missing_panics_doc)]

use axum::{
    Router,
    body::Body,
    http::{HeaderMap, Method, Request, StatusCode, header::CONTENT_TYPE},
};
use quickcart_storefront::config::StorefrontConfig;
use quickcart_storefront::state::AppState;
use tower::ServiceExt;

/// Catalog payload shaped like the public fakestore endpoint.
pub const CATALOG_JSON: &str = r#"[
    {
        "id": 1,
        "title": "Fjallraven - Foldsack No. 1 Backpack, Fits 15 Laptops",
        "price": 109.95,
        "description": "Your perfect pack for everyday use and walks in the forest.",
        "category": "men's clothing",
        "image": "https://fakestoreapi.com/img/81fPKd-2AYL._AC_SL1500_.jpg",
        "rating": { "rate": 3.9, "count": 120 }
    },
    {
        "id": 2,
        "title": "Mens Casual Premium Slim Fit T-Shirts",
        "price": 22.3,
        "description": "Slim-fitting style, contrast raglan long sleeve.",
        "category": "men's clothing",
        "image": "https://fakestoreapi.com/img/71-3HjGNDUL._AC_SY879._SX._UX._SY._UY_.jpg",
        "rating": { "rate": 4.1, "count": 259 }
    },
    {
        "id": 5,
        "title": "John Hardy Women's Legends Naga Gold & Silver Dragon Station Chain Bracelet",
        "price": 695,
        "description": "From our Legends Collection.",
        "category": "jewelery",
        "image": "https://fakestoreapi.com/img/71pWzhdJNwL._AC_UL640_QL65_ML3_.jpg",
        "rating": { "rate": 4.6, "count": 400 }
    }
]"#;

/// A storefront wired to a mock catalog endpoint.
pub struct TestStorefront {
    pub state: AppState,
    pub router: Router,
    pub catalog_mock: mockito::Mock,
    // Keeps the mock server alive for the duration of the test
    _server: mockito::ServerGuard,
}

/// A captured response.
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestStorefront {
    /// Build a storefront whose catalog endpoint answers with `status` and
    /// `body`. The catalog is left in `Loading`; call [`Self::load_catalog`]
    /// to run the fetch.
    ///
    /// The mock expects exactly one request.
    pub async fn new(status: usize, body: &str) -> Self {
        let mut server = mockito::Server::new_async().await;
        let catalog_mock = server
            .mock("GET", "/products")
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body)
            .expect(1)
            .create_async()
            .await;

        let catalog_url = format!("{}/products", server.url());
        let config = StorefrontConfig::from_lookup(|key| {
            (key == "CATALOG_URL").then(|| catalog_url.clone())
        })
        .expect("valid test configuration");

        let state = AppState::new(config).expect("Failed to build app state");
        let router = quickcart_storefront::app(state.clone());

        Self {
            state,
            router,
            catalog_mock,
            _server: server,
        }
    }

    /// Storefront with the sample catalog already loaded.
    pub async fn ready() -> Self {
        let storefront = Self::new(200, CATALOG_JSON).await;
        storefront.load_catalog().await;
        storefront
    }

    /// Run the one-time catalog fetch to completion.
    pub async fn load_catalog(&self) {
        if let Some(handle) = self.state.start_catalog_loading() {
            handle.await.expect("catalog task panicked");
        }
    }

    /// Issue a GET request.
    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(Method::GET, uri, None, true).await
    }

    /// Issue an HTMX form POST.
    pub async fn post_form(&self, uri: &str, form: &str) -> TestResponse {
        self.send(Method::POST, uri, Some(form), true).await
    }

    /// Issue a plain (non-HTMX) form POST.
    pub async fn post_form_plain(&self, uri: &str, form: &str) -> TestResponse {
        self.send(Method::POST, uri, Some(form), false).await
    }

    async fn send(&self, method: Method, uri: &str, form: Option<&str>, htmx: bool) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if htmx {
            builder = builder.header("HX-Request", "true");
        }
        let body = match form {
            Some(form) => {
                builder = builder.header(CONTENT_TYPE, "application/x-www-form-urlencoded");
                Body::from(form.to_string())
            }
            None => Body::empty(),
        };

        let response = self
            .router
            .clone()
            .oneshot(builder.body(body).expect("valid request"))
            .await
            .expect("router is infallible");

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("readable body");

        TestResponse {
            status,
            headers,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        }
    }
}
