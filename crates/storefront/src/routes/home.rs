//! Storefront page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Deserialize;
use tracing::instrument;

use super::cart::CartView;
use super::products::CatalogView;
use crate::filters;
use crate::state::AppState;

/// Query parameters for the storefront page.
#[derive(Debug, Default, Deserialize)]
pub struct HomeQuery {
    /// `open` shows the cart drawer.
    pub cart: Option<String>,
}

impl HomeQuery {
    fn cart_open(&self) -> bool {
        self.cart.as_deref() == Some("open")
    }
}

/// Storefront page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub catalog: CatalogView,
    pub cart: CartView,
    pub count: u64,
    pub cart_open: bool,
}

/// Display the storefront.
///
/// Only a loaded catalog shows the count badge, cart drawer and grid. While
/// loading the page is just the progress indicator, and after a failed load
/// it is just the error message.
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>, Query(query): Query<HomeQuery>) -> impl IntoResponse {
    let cart = state.cart().snapshot();

    HomeTemplate {
        catalog: CatalogView::from(&state.catalog().state()),
        cart: CartView::from(cart.as_ref()),
        count: cart.total_items(),
        cart_open: query.cart_open(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use quickcart_core::Cart;

    use super::*;

    #[test]
    fn test_cart_open_query() {
        assert!(HomeQuery { cart: Some("open".to_string()) }.cart_open());
        assert!(!HomeQuery { cart: Some("closed".to_string()) }.cart_open());
        assert!(!HomeQuery::default().cart_open());
    }

    fn page(catalog: CatalogView, cart_open: bool) -> String {
        HomeTemplate {
            catalog,
            cart: CartView::from(&Cart::new()),
            count: 0,
            cart_open,
        }
        .render()
        .unwrap()
    }

    #[test]
    fn test_home_renders_drawer_state() {
        let closed = page(CatalogView::Ready(Vec::new()), false);
        assert!(closed.contains("class=\"drawer\""));
        assert!(closed.contains("id=\"cart-count\""));
        assert!(closed.contains("class=\"footer\""));

        let open = page(CatalogView::Ready(Vec::new()), true);
        assert!(open.contains("class=\"drawer open\""));
    }

    #[test]
    fn test_home_failed_is_error_only() {
        let html = page(CatalogView::Failed, true);
        assert!(html.contains("Something Went Wrong"));
        assert!(!html.contains("Your Cart"));
        assert!(!html.contains("cart-count"));
        assert!(!html.contains("cart-button"));
        assert!(!html.contains("class=\"footer\""));
    }

    #[test]
    fn test_home_loading_is_progress_only() {
        let html = page(CatalogView::Loading, false);
        assert!(html.contains("progressbar"));
        assert!(!html.contains("Your Cart"));
        assert!(!html.contains("cart-count"));
    }
}
