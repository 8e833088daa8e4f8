//! Session-related types.

/// Session keys.
pub mod keys {
    /// Key for the visitor's cart ID (`cart_store::CartId`).
    pub const CART_ID: &str = "cart_id";
}
