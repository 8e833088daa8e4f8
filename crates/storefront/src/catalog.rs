//! Static product catalog.
//!
//! The storefront has no product service: six sample products and four
//! collections are built once at startup and shared read-only through
//! `AppState`.

use jungle_magic_core::{Collection, CurrencyCode, Price, Product, ProductId};

/// Number of sample products in the catalog.
const SAMPLE_PRODUCT_COUNT: u32 = 6;

/// Unit price of every sample product, in cents.
const SAMPLE_PRICE_CENTS: i64 = 2500;

/// Placeholder image host (allowed by the CSP `img-src` directive).
pub const PLACEHOLDER_IMAGE_HOST: &str = "https://placehold.co";

/// Read-only product and collection data.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    collections: Vec<Collection>,
}

impl Catalog {
    /// Build a catalog from explicit products and collections.
    #[must_use]
    pub const fn new(products: Vec<Product>, collections: Vec<Collection>) -> Self {
        Self {
            products,
            collections,
        }
    }

    /// The built-in sample catalog.
    #[must_use]
    pub fn sample() -> Self {
        let products = (1..=SAMPLE_PRODUCT_COUNT)
            .map(|n| Product {
                id: ProductId::new(n),
                name: format!("Product {n}"),
                description: "A curated lifestyle accessory from the Jungle Magic range."
                    .to_string(),
                price: Price::from_cents(SAMPLE_PRICE_CENTS, CurrencyCode::USD),
                image_url: format!("{PLACEHOLDER_IMAGE_HOST}/600x400?text=Product+{n}"),
            })
            .collect();

        Self::new(products, sample_collections())
    }

    /// All products in display order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by ID.
    #[must_use]
    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// All collections in display order.
    #[must_use]
    pub fn collections(&self) -> &[Collection] {
        &self.collections
    }
}

fn sample_collections() -> Vec<Collection> {
    [
        (
            "jungle-jewelry",
            "Jungle Jewelry",
            "Bold, botanical pieces for every day.",
        ),
        (
            "wild-home",
            "Wild Home",
            "Decor and small comforts with a tropical twist.",
        ),
        (
            "safari-bags",
            "Safari Bags",
            "Totes and pouches built for adventures big and small.",
        ),
        (
            "fun-finds",
            "Fun Finds",
            "Stationery, trinkets and gifts that make people smile.",
        ),
    ]
    .into_iter()
    .map(|(handle, title, description)| Collection {
        handle: handle.to_string(),
        title: title.to_string(),
        description: description.to_string(),
    })
    .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_has_six_products_at_25_dollars() {
        let catalog = Catalog::sample();
        assert_eq!(catalog.products().len(), 6);
        for product in catalog.products() {
            assert_eq!(product.price.display(), "$25.00");
            assert_eq!(product.name, format!("Product {}", product.id));
        }
    }

    #[test]
    fn test_sample_has_four_collections() {
        let catalog = Catalog::sample();
        let titles: Vec<&str> = catalog
            .collections()
            .iter()
            .map(|c| c.title.as_str())
            .collect();
        assert_eq!(
            titles,
            vec!["Jungle Jewelry", "Wild Home", "Safari Bags", "Fun Finds"]
        );
    }

    #[test]
    fn test_product_lookup() {
        let catalog = Catalog::sample();
        assert_eq!(catalog.product(ProductId::new(3)).unwrap().name, "Product 3");
        assert!(catalog.product(ProductId::new(0)).is_none());
        assert!(catalog.product(ProductId::new(7)).is_none());
    }
}
