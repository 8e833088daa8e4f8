//! Jungle Magic storefront: catalog pages and a per-session cart.
//!
//! [`app::build_router`] assembles the whole application; the binary adds
//! Sentry and serves it, the integration tests drive it in-process.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod app;
pub mod cart_store;
pub mod catalog;
pub mod config;
pub mod error;
pub mod filters;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod state;
