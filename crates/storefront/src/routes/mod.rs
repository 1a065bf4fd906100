//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Storefront page (?cart=open shows the drawer)
//! GET  /catalog                - Catalog fragment (HTMX, polls while loading)
//!
//! # Cart (HTMX fragments)
//! GET  /cart                   - Cart drawer contents (fragment)
//! GET  /cart/count             - Cart count badge (fragment)
//! POST /cart/add               - Add one unit (returns badge, triggers cart-updated)
//! POST /cart/remove            - Remove one unit (returns cart_items fragment)
//! POST /cart/clear             - Empty the cart (returns cart_items fragment)
//!
//! # Health
//! GET  /health                 - Liveness
//! GET  /health/ready           - Readiness (catalog loaded)
//! ```

pub mod cart;
pub mod health;
pub mod home;
pub mod products;

use axum::{
    Router,
    http::HeaderMap,
    routing::{get, post},
};

use crate::state::AppState;

/// Header set by HTMX on every request it issues.
pub const HX_REQUEST_HEADER: &str = "hx-request";

/// Event name clients listen for to refresh the badge and drawer.
pub const CART_UPDATED_EVENT: &str = "cart-updated";

/// Whether the request came from HTMX rather than a plain form post.
#[must_use]
pub fn is_htmx(headers: &HeaderMap) -> bool {
    headers
        .get(HX_REQUEST_HEADER)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.eq_ignore_ascii_case("true"))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/count", get(cart::count))
        .route("/add", post(cart::add))
        .route("/remove", post(cart::remove))
        .route("/clear", post(cart::clear))
}

/// Create the health check routes router.
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(health::health))
        .route("/ready", get(health::readiness))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Storefront page
        .route("/", get(home::home))
        // Catalog grid fragment
        .route("/catalog", get(products::catalog))
        // Cart routes
        .nest("/cart", cart_routes())
        // Health checks
        .nest("/health", health_routes())
}
