//! Cart route handlers.
//!
//! Carts are reached through `middleware::SessionCart`. Adding from a
//! product grid is a plain form post that redirects back to the grid.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Form, extract::State, response::Redirect};
use jungle_magic_core::{Cart, CartItem};
use serde::Deserialize;
use tracing::instrument;

use super::products::find_product;
use super::{NavView, Page};
use crate::error::{AppError, Result, cart_breadcrumb};
use crate::filters;
use crate::middleware::SessionCart;
use crate::state::AppState;

/// Quantity used when a form does not choose one.
const DEFAULT_QUANTITY: u32 = 1;

/// Where grid adds return to when no valid `return_to` is given.
const DEFAULT_RETURN_TO: &str = "/";

/// Cart item display data for templates.
#[derive(Clone)]
pub struct CartItemView {
    pub id: String,
    pub name: String,
    pub quantity: u32,
    pub price: String,
    pub subtotal: String,
}

/// Cart display data for templates.
#[derive(Clone)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub total: String,
    pub line_count: usize,
}

// =============================================================================
// Type Conversions
// =============================================================================

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart.items().iter().map(CartItemView::from).collect(),
            total: cart.total().display(),
            line_count: cart.line_count(),
        }
    }
}

impl From<&CartItem> for CartItemView {
    fn from(item: &CartItem) -> Self {
        Self {
            id: item.id.to_string(),
            name: item.name.clone(),
            quantity: item.quantity,
            price: item.price.display(),
            subtotal: item.subtotal().display(),
        }
    }
}

// =============================================================================
// Form Helpers
// =============================================================================

/// Grid add-to-cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: String,
    pub quantity: Option<String>,
    pub return_to: Option<String>,
}

/// Parse a submitted quantity. A missing or blank value means one.
///
/// Zero parses successfully; the cart itself rejects it.
///
/// # Errors
///
/// Returns `AppError::BadRequest` if the value is not a non-negative integer.
pub fn parse_quantity(raw: Option<&str>) -> Result<u32> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_QUANTITY),
        Some(value) => value
            .parse::<u32>()
            .map_err(|_| AppError::BadRequest(format!("invalid quantity '{value}'"))),
    }
}

/// Only same-site absolute paths are accepted as redirect targets.
fn safe_return_to(return_to: Option<&str>) -> &str {
    match return_to {
        Some(path)
            if path.starts_with('/') && !path.starts_with("//") && !path.contains('\\') =>
        {
            path
        }
        _ => DEFAULT_RETURN_TO,
    }
}

// =============================================================================
// Templates
// =============================================================================

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub nav: NavView,
    pub cart: CartView,
}

// =============================================================================
// Handlers
// =============================================================================

/// Display cart page.
#[instrument(skip(cart))]
pub async fn show(cart: SessionCart) -> CartShowTemplate {
    CartShowTemplate {
        nav: NavView::new(Page::Cart, cart.cart()),
        cart: CartView::from(cart.cart()),
    }
}

/// Add one product from a grid, then return to the page it was added from.
#[instrument(skip(state, cart))]
pub async fn add(
    State(state): State<AppState>,
    mut cart: SessionCart,
    Form(form): Form<AddToCartForm>,
) -> Result<Redirect> {
    let product = find_product(&state, &form.product_id)?;
    let quantity = parse_quantity(form.quantity.as_deref())?;

    let updated = cart.add(CartItem::from_product(product, quantity)).await?;
    tracing::info!(
        product_id = %product.id,
        quantity,
        lines = updated.line_count(),
        "Added to cart"
    );
    cart_breadcrumb("Added to cart from grid", product.id, quantity);

    Ok(Redirect::to(safe_return_to(form.return_to.as_deref())))
}
