//! Collection route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use jungle_magic_core::Collection;
use tracing::instrument;

use super::{NavView, Page};
use crate::filters;
use crate::middleware::SessionCart;
use crate::state::AppState;

/// Collection display data for templates.
#[derive(Clone)]
pub struct CollectionView {
    pub handle: String,
    pub title: String,
    pub description: String,
}

impl From<&Collection> for CollectionView {
    fn from(collection: &Collection) -> Self {
        Self {
            handle: collection.handle.clone(),
            title: collection.title.clone(),
            description: collection.description.clone(),
        }
    }
}

/// Collection listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "collections/index.html")]
pub struct CollectionsIndexTemplate {
    pub nav: NavView,
    pub collections: Vec<CollectionView>,
}

/// Display collection listing page.
#[instrument(skip(state, cart))]
pub async fn index(State(state): State<AppState>, cart: SessionCart) -> CollectionsIndexTemplate {
    CollectionsIndexTemplate {
        nav: NavView::new(Page::Collections, cart.cart()),
        collections: state
            .catalog()
            .collections()
            .iter()
            .map(CollectionView::from)
            .collect(),
    }
}
