//! Product catalog loading.
//!
//! # Architecture
//!
//! - [`CatalogClient`] performs a single `GET` against the catalog endpoint
//!   and parses the JSON array of products
//! - [`CatalogLoader`] owns the shared [`CatalogState`] and runs the fetch
//!   exactly once, in a background task, when the server starts
//!
//! Nothing else in the storefront issues catalog requests. Page renders and
//! HTMX polling only read the current state, so the catalog is never
//! refetched behind the user's back.
//!
//! # Example
//!
//! ```rust,ignore
//! use quickcart_storefront::catalog::{CatalogClient, CatalogLoader};
//!
//! let loader = CatalogLoader::new();
//! loader.start(CatalogClient::new(&config.catalog)?);
//!
//! if let Some(products) = loader.state().products() {
//!     tracing::info!(count = products.len(), "catalog ready");
//! }
//! ```

mod client;
mod loader;

pub use client::CatalogClient;
pub use loader::CatalogLoader;
pub use quickcart_core::CatalogState;

use thiserror::Error;

/// Errors that can occur when fetching the catalog.
///
/// These are logged and reported, then collapsed into
/// [`CatalogState::Failed`]. Users never see the distinction.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("Unexpected status {0}")]
    Status(reqwest::StatusCode),

    /// Body was not a JSON array of products.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
