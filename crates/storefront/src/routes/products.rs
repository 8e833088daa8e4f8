//! Product route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, State},
    response::Redirect,
};
use jungle_magic_core::{CartItem, Product, ProductId};
use serde::Deserialize;
use tracing::instrument;

use super::cart::parse_quantity;
use super::{NavView, Page};
use crate::error::{AppError, Result, cart_breadcrumb};
use crate::filters;
use crate::middleware::SessionCart;
use crate::state::AppState;

/// Product display data for templates.
#[derive(Clone)]
pub struct ProductView {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: String,
    pub image_url: String,
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price.display(),
            image_url: product.image_url.clone(),
        }
    }
}

/// Product detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/show.html")]
pub struct ProductShowTemplate {
    pub nav: NavView,
    pub product: ProductView,
}

/// Product detail add-to-cart form.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub quantity: Option<String>,
}

/// Resolve a path segment to a catalog product.
///
/// # Errors
///
/// Returns `AppError::NotFound` for non-numeric or unknown IDs.
pub fn find_product<'a>(state: &'a AppState, raw_id: &str) -> Result<&'a Product> {
    raw_id
        .parse::<ProductId>()
        .ok()
        .and_then(|id| state.catalog().product(id))
        .ok_or_else(|| AppError::NotFound(format!("product {raw_id}")))
}

/// Display product detail page.
#[instrument(skip(state, cart))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
    cart: SessionCart,
) -> Result<ProductShowTemplate> {
    let product = find_product(&state, &id)?;

    Ok(ProductShowTemplate {
        nav: NavView::new(Page::Product, cart.cart()),
        product: ProductView::from(product),
    })
}

/// Add the chosen quantity of a product to the cart, then show the cart.
#[instrument(skip(state, cart))]
pub async fn add_to_cart(
    State(state): State<AppState>,
    Path(id): Path<String>,
    mut cart: SessionCart,
    Form(form): Form<AddToCartForm>,
) -> Result<Redirect> {
    let product = find_product(&state, &id)?;
    let quantity = parse_quantity(form.quantity.as_deref())?;

    let updated = cart.add(CartItem::from_product(product, quantity)).await?;
    tracing::info!(
        product_id = %product.id,
        quantity,
        lines = updated.line_count(),
        "Added to cart from product page"
    );
    cart_breadcrumb("Added to cart from product page", product.id, quantity);

    Ok(Redirect::to("/cart"))
}
