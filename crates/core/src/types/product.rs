//! Catalog entities.
//!
//! Products and collections are static content; nothing in the storefront
//! mutates them after startup.

use serde::{Deserialize, Serialize};

use super::{Price, ProductId};

/// A product offered in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    /// Unit price.
    pub price: Price,
    /// Placeholder image URL.
    pub image_url: String,
}

/// A named group of products shown as a tile on the collections page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    /// URL-safe identifier (e.g., "jungle-jewelry").
    pub handle: String,
    pub title: String,
    pub description: String,
}
