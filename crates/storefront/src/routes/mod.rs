//! Page and form handlers.
//!
//! # Routes
//!
//! ```text
//! GET  /                       - Home page (hero + featured products)
//! GET  /collections            - Collection tiles
//! GET  /product/{id}           - Product detail with quantity chooser
//! POST /product/{id}           - Add chosen quantity, redirect to /cart
//!
//! # Cart
//! GET  /cart                   - Cart page
//! POST /cart/add               - Add to cart from a product grid
//! ```
//!
//! `/health` and `/static` are mounted by `app::build_router`.

pub mod cart;
pub mod collections;
pub mod home;
pub mod products;

use axum::{
    Router,
    routing::{get, post},
};
use jungle_magic_core::Cart;

use crate::state::AppState;

/// Top-level views, used to mark the active nav link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Collections,
    Product,
    Cart,
}

impl Page {
    /// Key compared against in `base.html`.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Collections => "collections",
            Self::Product => "product",
            Self::Cart => "cart",
        }
    }
}

/// Data for the shared header: active page and live cart count.
#[derive(Debug, Clone)]
pub struct NavView {
    pub active: &'static str,
    pub cart_count: usize,
}

impl NavView {
    #[must_use]
    pub fn new(page: Page, cart: &Cart) -> Self {
        Self {
            active: page.key(),
            cart_count: cart.line_count(),
        }
    }
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/collections", get(collections::index))
        .route(
            "/product/{id}",
            get(products::show).post(products::add_to_cart),
        )
        .nest("/cart", cart_routes())
}
