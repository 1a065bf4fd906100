//! Catalog product records.

use serde::{Deserialize, Serialize};

use super::{Price, ProductId};

/// A product as returned by the remote catalog.
///
/// Read-only to this system. Fields the catalog sends that are not listed
/// here (such as `rating`) are ignored during deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub price: Price,
    pub description: String,
    pub category: String,
    pub image: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_product_deserialize_ignores_unknown_fields() {
        let json = r#"{
            "id": 1,
            "title": "Fjallraven - Foldsack No. 1 Backpack",
            "price": 109.95,
            "description": "Your perfect pack for everyday use",
            "category": "men's clothing",
            "image": "https://fakestoreapi.com/img/81fPKd-2AYL._AC_SL1500_.jpg",
            "rating": { "rate": 3.9, "count": 120 }
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, ProductId::new(1));
        assert_eq!(product.price.to_string(), "$109.95");
        assert_eq!(product.category, "men's clothing");
    }

    #[test]
    fn test_product_missing_field_fails() {
        let json = r#"{ "id": 1, "title": "No price" }"#;
        assert!(serde_json::from_str::<Product>(json).is_err());
    }
}
