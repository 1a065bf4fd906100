//! Cart route handlers.
//!
//! Cart operations use HTMX for dynamic updates without full page reloads.
//! The cart lives in the process-wide [`CartStore`](quickcart_core::CartStore);
//! every mutation publishes a new snapshot and the response is rendered from
//! that snapshot.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{State, rejection::FormRejection},
    http::HeaderMap,
    response::{AppendHeaders, IntoResponse, Redirect, Response},
};
use quickcart_core::{Cart, CartEntry, ProductId, format_amount};
use serde::Deserialize;
use tracing::instrument;

use super::{CART_UPDATED_EVENT, is_htmx};
use crate::error::{AppError, Result, add_breadcrumb};
use crate::state::AppState;

/// Cart item display data for templates.
#[derive(Clone)]
pub struct CartItemView {
    pub id: i64,
    pub title: String,
    pub image: String,
    pub quantity: u64,
    pub price: String,
    pub line_price: String,
}

/// Cart display data for templates.
#[derive(Clone)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub subtotal: String,
    pub item_count: u64,
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart.entries().iter().map(CartItemView::from).collect(),
            subtotal: format_amount(cart.subtotal()),
            item_count: cart.total_items(),
        }
    }
}

impl From<&CartEntry> for CartItemView {
    fn from(entry: &CartEntry) -> Self {
        let product = entry.product();
        Self {
            id: product.id.as_i64(),
            title: product.title.clone(),
            image: product.image.clone(),
            quantity: entry.amount(),
            price: product.price.to_string(),
            line_price: format_amount(entry.line_total()),
        }
    }
}

/// Form data identifying a product for add/remove.
#[derive(Debug, Deserialize)]
pub struct CartProductForm {
    pub product_id: ProductId,
}

/// Unwrap a cart form, turning a missing or non-numeric id into a 400.
fn product_form(
    form: std::result::Result<Form<CartProductForm>, FormRejection>,
) -> Result<CartProductForm> {
    form.map(|Form(form)| form)
        .map_err(|rejection| AppError::BadRequest(rejection.body_text()))
}

/// Cart items fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_items.html")]
pub struct CartItemsTemplate {
    pub cart: CartView,
}

/// Cart count badge fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u64,
}

/// Respond to a cart mutation.
///
/// HTMX requests get the fragment plus a `cart-updated` trigger. Plain form
/// posts are sent back to the storefront page with the drawer open.
fn mutation_response(headers: &HeaderMap, fragment: impl IntoResponse) -> Response {
    if !is_htmx(headers) {
        return Redirect::to("/?cart=open").into_response();
    }

    (
        AppendHeaders([("HX-Trigger", CART_UPDATED_EVENT)]),
        fragment,
    )
        .into_response()
}

/// Display cart drawer contents (HTMX).
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> impl IntoResponse {
    CartItemsTemplate {
        cart: CartView::from(state.cart().snapshot().as_ref()),
    }
}

/// Get cart count badge (HTMX).
#[instrument(skip(state))]
pub async fn count(State(state): State<AppState>) -> impl IntoResponse {
    CartCountTemplate {
        count: state.cart().snapshot().total_items(),
    }
}

/// Add one unit of a product to the cart (HTMX).
///
/// The product must exist in the loaded catalog. Returns the updated count
/// badge with an HTMX trigger so the drawer refreshes too.
///
/// # Errors
///
/// - `AppError::BadRequest` if the form has no valid `product_id`
/// - `AppError::CatalogUnavailable` if the catalog is loading or failed
/// - `AppError::NotFound` if the id is not in the catalog
#[instrument(skip(state, headers))]
pub async fn add(
    State(state): State<AppState>,
    headers: HeaderMap,
    form: std::result::Result<Form<CartProductForm>, FormRejection>,
) -> Result<Response> {
    let form = product_form(form)?;
    let catalog = state.catalog().state();
    if !catalog.is_ready() {
        return Err(AppError::CatalogUnavailable);
    }

    let product = catalog
        .find(form.product_id)
        .ok_or_else(|| AppError::NotFound(format!("product {}", form.product_id)))?;

    let cart = state.cart().add(product);

    let product_id = form.product_id.to_string();
    add_breadcrumb("cart", "Added to cart", Some(&[("product_id", product_id.as_str())]));
    tracing::info!(
        product_id = %form.product_id,
        total_items = cart.total_items(),
        "Added to cart"
    );

    Ok(mutation_response(
        &headers,
        CartCountTemplate {
            count: cart.total_items(),
        },
    ))
}

/// Remove one unit of a product from the cart (HTMX).
///
/// Unknown ids are ignored and the unchanged cart is returned.
///
/// # Errors
///
/// Returns `AppError::BadRequest` if the form has no valid `product_id`.
#[instrument(skip(state, headers))]
pub async fn remove(
    State(state): State<AppState>,
    headers: HeaderMap,
    form: std::result::Result<Form<CartProductForm>, FormRejection>,
) -> Result<Response> {
    let form = product_form(form)?;
    let cart = state.cart().remove(form.product_id);

    let product_id = form.product_id.to_string();
    add_breadcrumb(
        "cart",
        "Removed from cart",
        Some(&[("product_id", product_id.as_str())]),
    );
    tracing::info!(
        product_id = %form.product_id,
        total_items = cart.total_items(),
        "Removed from cart"
    );

    Ok(mutation_response(
        &headers,
        CartItemsTemplate {
            cart: CartView::from(cart.as_ref()),
        },
    ))
}

/// Empty the cart (HTMX).
#[instrument(skip(state, headers))]
pub async fn clear(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let cart = state.cart().clear();

    add_breadcrumb("cart", "Cleared cart", None);
    tracing::info!("Cleared cart");

    mutation_response(
        &headers,
        CartItemsTemplate {
            cart: CartView::from(cart.as_ref()),
        },
    )
}
