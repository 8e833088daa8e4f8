//! Shopping cart with quantity aggregation.
//!
//! A [`Cart`] is an ordered list of [`CartItem`] lines. Adding an item whose
//! product is already in the cart merges into the existing line instead of
//! appending a new one, so there is at most one line per [`ProductId`].
//! Lines keep the position at which their product was first added.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{CurrencyCode, Price, Product, ProductId};

/// Errors raised when a cart mutation is rejected.
///
/// A rejected mutation leaves the cart unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    /// Quantity must be at least one.
    #[error("Invalid quantity: {0} (must be at least 1)")]
    InvalidQuantity(u32),

    /// Merged quantity does not fit in a line.
    #[error("Quantity overflow for product {id}")]
    QuantityOverflow { id: ProductId },
}

/// One distinct product line in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: ProductId,
    pub name: String,
    /// Unit price.
    pub price: Price,
    pub quantity: u32,
}

impl CartItem {
    /// Create a line for `quantity` units of a catalog product.
    #[must_use]
    pub fn from_product(product: &Product, quantity: u32) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            price: product.price,
            quantity,
        }
    }

    /// Line subtotal (`price * quantity`).
    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.price.times(self.quantity)
    }
}

/// An ordered, merge-by-product collection of cart lines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Add an item, merging by product ID.
    ///
    /// If a line for `item.id` already exists its quantity is increased by
    /// `item.quantity` and every other field of that line is kept. Otherwise
    /// the item is appended as a new line.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::InvalidQuantity`] for a zero quantity and
    /// [`CartError::QuantityOverflow`] if the merged quantity would overflow.
    pub fn add_item(&mut self, item: CartItem) -> Result<(), CartError> {
        if item.quantity == 0 {
            return Err(CartError::InvalidQuantity(item.quantity));
        }

        match self.items.iter_mut().find(|line| line.id == item.id) {
            Some(existing) => {
                existing.quantity = existing
                    .quantity
                    .checked_add(item.quantity)
                    .ok_or(CartError::QuantityOverflow { id: item.id })?;
            }
            None => self.items.push(item),
        }

        Ok(())
    }

    /// Lines in the order their products were first added.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Look up the line for a product.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&CartItem> {
        self.items.iter().find(|line| line.id == id)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct lines. This is the count shown in the nav badge.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    /// Sum of quantities across all lines.
    #[must_use]
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Cart total, computed fresh from the current lines.
    ///
    /// The catalog is single-currency; the total takes the currency of the
    /// first line, or USD for an empty cart.
    #[must_use]
    pub fn total(&self) -> Price {
        let currency = self
            .items
            .first()
            .map_or(CurrencyCode::default(), |line| line.price.currency_code);

        self.items
            .iter()
            .fold(Price::zero(currency), |total, line| {
                Price::new(total.amount + line.subtotal().amount, currency)
            })
    }
}
