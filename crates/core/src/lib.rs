//! Jungle Magic Core - Shared domain types.
//!
//! # Architecture
//!
//! The core crate contains only types and pure logic - no I/O, no HTTP,
//! no session handling. The storefront binary owns all of that.
//!
//! # Modules
//!
//! - [`types`] - Product IDs, prices, catalog entities
//! - [`cart`] - The cart and its merge-by-product `add_item` operation

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod types;

pub use cart::{Cart, CartError, CartItem};
pub use types::*;
