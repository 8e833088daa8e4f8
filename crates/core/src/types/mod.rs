//! Catalog and pricing types.

pub mod id;
pub mod price;
pub mod product;

pub use id::ProductId;
pub use price::{CurrencyCode, Price};
pub use product::{Collection, Product};
