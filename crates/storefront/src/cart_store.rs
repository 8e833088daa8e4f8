//! Server-side cart storage.
//!
//! Carts are keyed by a cart ID that the visitor's session carries. Every
//! cart sits behind its own async mutex, so adds from one session apply one
//! after another even when requests overlap. Carts idle for longer than the
//! session TTL are evicted.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use jungle_magic_core::{Cart, CartError, CartItem};
use moka::future::Cache;
use tokio::sync::Mutex;
use uuid::Uuid;

/// Identifies one visitor's cart; stored in their session.
pub type CartId = Uuid;

type SharedCart = Arc<Mutex<Cart>>;

/// In-memory cart store shared by every request.
///
/// Cheap to clone; clones share the same carts.
#[derive(Clone)]
pub struct CartStore {
    carts: Cache<CartId, SharedCart>,
}

impl fmt::Debug for CartStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartStore")
            .field("carts", &self.carts.entry_count())
            .finish()
    }
}

impl CartStore {
    /// A store whose carts expire after `time_to_idle` without reads or adds.
    #[must_use]
    pub fn new(time_to_idle: Duration) -> Self {
        Self {
            carts: Cache::builder().time_to_idle(time_to_idle).build(),
        }
    }

    /// Copy of the cart, or an empty cart if it does not exist or expired.
    pub async fn snapshot(&self, id: CartId) -> Cart {
        match self.carts.get(&id).await {
            Some(cart) => cart.lock().await.clone(),
            None => Cart::default(),
        }
    }

    /// Add an item to the cart, creating the cart on first use.
    ///
    /// The cart stays locked from read to write, so concurrent adds to the
    /// same cart never lose a quantity. Returns the cart after the add.
    ///
    /// # Errors
    ///
    /// Returns the cart's rejection; the cart is left unchanged.
    pub async fn add(&self, id: CartId, item: CartItem) -> Result<Cart, CartError> {
        let shared = self.carts.get_with(id, async { SharedCart::default() }).await;
        let mut cart = shared.lock().await;
        cart.add_item(item)?;
        Ok(cart.clone())
    }

    /// Number of live carts, after applying pending evictions.
    pub async fn cart_count(&self) -> u64 {
        self.carts.run_pending_tasks().await;
        self.carts.entry_count()
    }
}
