//! State of the one-shot catalog load.

use std::sync::Arc;

use crate::types::{Product, ProductId};

/// Result of loading the product catalog.
///
/// Exactly one of three states. `Failed` carries no detail: every failure
/// (network, bad status, malformed body) is shown to the user the same way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CatalogState {
    /// The fetch has not completed yet.
    #[default]
    Loading,
    /// The fetch or the parse failed.
    Failed,
    /// The full catalog, in the order the endpoint returned it.
    Ready(Arc<[Product]>),
}

impl CatalogState {
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    pub const fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    /// Products if the catalog is ready, otherwise `None`.
    #[must_use]
    pub fn products(&self) -> Option<&[Product]> {
        match self {
            Self::Ready(products) => Some(products),
            Self::Loading | Self::Failed => None,
        }
    }

    /// Find a product by id in a ready catalog.
    #[must_use]
    pub fn find(&self, id: ProductId) -> Option<&Product> {
        self.products()?.iter().find(|product| product.id == id)
    }
}

impl From<Vec<Product>> for CatalogState {
    fn from(products: Vec<Product>) -> Self {
        Self::Ready(products.into())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::Price;

    fn product(id: i64) -> Product {
        Product {
            id: ProductId::new(id),
            title: format!("Product {id}"),
            price: Price::from_cents(100).unwrap(),
            description: String::new(),
            category: String::new(),
            image: String::new(),
        }
    }

    #[test]
    fn test_default_is_loading() {
        let state = CatalogState::default();
        assert!(state.is_loading());
        assert!(state.products().is_none());
    }

    #[test]
    fn test_failed_has_no_products() {
        let state = CatalogState::Failed;
        assert!(!state.is_ready());
        assert!(state.find(ProductId::new(1)).is_none());
    }

    #[test]
    fn test_ready_find() {
        let state = CatalogState::from(vec![product(1), product(2)]);
        assert!(state.is_ready());
        assert_eq!(state.products().unwrap().len(), 2);
        assert_eq!(state.find(ProductId::new(2)).unwrap().title, "Product 2");
        assert!(state.find(ProductId::new(3)).is_none());
    }
}
