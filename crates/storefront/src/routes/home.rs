//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use tracing::instrument;

use super::products::ProductView;
use super::{NavView, Page};
use crate::filters;
use crate::middleware::SessionCart;
use crate::state::AppState;

/// Copy for the banner above the featured grid.
#[derive(Clone)]
pub struct HeroConfig {
    pub title: String,
    pub subtitle: String,
    pub button_text: String,
    pub button_url: String,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            title: "Welcome to Jungle Magic".to_string(),
            subtitle: "Explore our curated collection of lifestyle accessories and fun finds."
                .to_string(),
            button_text: "Shop Now".to_string(),
            button_url: "/collections".to_string(),
        }
    }
}

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub nav: NavView,
    pub hero: HeroConfig,
    /// Featured products grid, each with an "Add to Cart" form.
    pub products: Vec<ProductView>,
}

/// Display the home page.
#[instrument(skip(state, cart))]
pub async fn home(State(state): State<AppState>, cart: SessionCart) -> HomeTemplate {
    HomeTemplate {
        nav: NavView::new(Page::Home, cart.cart()),
        hero: HeroConfig::default(),
        products: state
            .catalog()
            .products()
            .iter()
            .map(ProductView::from)
            .collect(),
    }
}
