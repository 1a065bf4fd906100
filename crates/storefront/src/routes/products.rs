//! Catalog route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::State,
    http::HeaderMap,
    response::{AppendHeaders, IntoResponse, Response},
};
use quickcart_core::{CatalogState, Product};
use tracing::instrument;

use super::is_htmx;
use crate::state::AppState;

/// Product display data for templates.
#[derive(Clone)]
pub struct ProductView {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub category: String,
    pub price: String,
    pub image: String,
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.as_i64(),
            title: product.title.clone(),
            description: product.description.clone(),
            category: product.category.clone(),
            price: product.price.to_string(),
            image: product.image.clone(),
        }
    }
}

/// Catalog display state for templates.
///
/// Mirrors [`CatalogState`]: a failed load renders only the error message,
/// never a partial grid.
#[derive(Clone)]
pub enum CatalogView {
    Loading,
    Failed,
    Ready(Vec<ProductView>),
}

impl CatalogView {
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed)
    }

    #[must_use]
    pub const fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    /// Products to render. Empty unless the catalog is ready.
    #[must_use]
    pub fn products(&self) -> &[ProductView] {
        match self {
            Self::Ready(products) => products,
            Self::Loading | Self::Failed => &[],
        }
    }
}

impl From<&CatalogState> for CatalogView {
    fn from(state: &CatalogState) -> Self {
        match state {
            CatalogState::Loading => Self::Loading,
            CatalogState::Failed => Self::Failed,
            CatalogState::Ready(products) => {
                Self::Ready(products.iter().map(ProductView::from).collect())
            }
        }
    }
}

/// Catalog fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/catalog.html")]
pub struct CatalogTemplate {
    pub catalog: CatalogView,
}

/// Render the catalog grid, progress indicator, or error message.
///
/// The loading page polls this fragment. Once the load settles, an HTMX
/// poll gets `HX-Refresh` so the browser reloads the full page, which then
/// shows either the shop or only the error message.
#[instrument(skip(state, headers))]
pub async fn catalog(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let catalog = state.catalog().state();
    let template = CatalogTemplate {
        catalog: CatalogView::from(&catalog),
    };

    if is_htmx(&headers) && !catalog.is_loading() {
        return (AppendHeaders([("HX-Refresh", "true")]), template).into_response();
    }

    template.into_response()
}
