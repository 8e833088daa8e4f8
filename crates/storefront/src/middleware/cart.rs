//! Session-owned cart extractor.
//!
//! Every browser session owns at most one cart. The session holds only the
//! cart's ID; the cart itself lives in the [`CartStore`], which serializes
//! concurrent adds. Handlers take a [`SessionCart`] to read the cart and call
//! [`SessionCart::add`] to change it. Nothing else in the storefront can
//! reach a cart.

use axum::{extract::FromRequestParts, http::request::Parts};
use jungle_magic_core::{Cart, CartItem};
use tower_sessions::Session;
use uuid::Uuid;

use crate::cart_store::{CartId, CartStore};
use crate::error::AppError;
use crate::models::session_keys;
use crate::state::AppState;

/// The current session's cart.
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(cart: SessionCart) -> impl IntoResponse {
///     format!("{} lines", cart.cart().line_count())
/// }
/// ```
pub struct SessionCart {
    session: Session,
    store: CartStore,
    cart_id: Option<CartId>,
    cart: Cart,
}

impl SessionCart {
    /// Resolve the session's cart ID and snapshot its cart.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Session` if the session store cannot be read.
    pub async fn load(session: Session, store: CartStore) -> Result<Self, AppError> {
        let cart_id = session.get::<CartId>(session_keys::CART_ID).await?;
        let cart = match cart_id {
            Some(id) => store.snapshot(id).await,
            None => Cart::default(),
        };

        Ok(Self {
            session,
            store,
            cart_id,
            cart,
        })
    }

    /// Snapshot of the cart taken when the request started, or after the
    /// last [`add`](Self::add).
    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Add an item, merging by product.
    ///
    /// The first successful add gives the session a cart ID, which makes the
    /// session layer issue the cookie.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Cart` if the cart rejects the item, in which case
    /// nothing changes, or `AppError::Session` if the session cannot be
    /// written.
    pub async fn add(&mut self, item: CartItem) -> Result<&Cart, AppError> {
        let (id, is_new) = match self.cart_id {
            Some(id) => (id, false),
            None => (Uuid::new_v4(), true),
        };

        self.cart = self.store.add(id, item).await?;

        if is_new {
            self.session.insert(session_keys::CART_ID, id).await?;
            self.cart_id = Some(id);
        }
        Ok(&self.cart)
    }
}

impl FromRequestParts<AppState> for SessionCart {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // Set by SessionManagerLayer
        let session = parts
            .extensions
            .get::<Session>()
            .cloned()
            .ok_or_else(|| AppError::Internal("session layer not installed".to_string()))?;

        Self::load(session, state.carts().clone()).await
    }
}
