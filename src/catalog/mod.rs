//! # Catalog
//!
//! The static, read-only product list shown on the storefront page.
//!
//! A [`Catalog`] is validated once at construction and never changes afterwards.
//! Lookups return `Option` so that a stale or malformed id is a value the caller has
//! to handle, never a silent corruption of cart state.
//!
//! ```rust
//! use dessert_cart::catalog::Catalog;
//! use dessert_cart::model::ProductId;
//!
//! let catalog = Catalog::desserts();
//! assert_eq!(catalog.len(), 12);
//! assert_eq!(catalog.find(ProductId(2)).map(|p| p.name.as_str()), Some("French Macaron"));
//! assert!(catalog.find(ProductId(999)).is_none());
//! ```

pub mod error;

pub use error::*;

use crate::model::{Product, ProductId};
use std::collections::HashMap;
use tracing::debug;

/// Ordered, validated product list with an id index.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    index: HashMap<ProductId, usize>,
}

impl Catalog {
    /// Builds a catalog from products in display order.
    ///
    /// # Errors
    /// - [`CatalogError::DuplicateId`] if two products share an id
    /// - [`CatalogError::InvalidPrice`] if a price is negative, NaN or infinite
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(products.len());
        for (position, product) in products.iter().enumerate() {
            if !product.price.is_finite() || product.price < 0.0 {
                return Err(CatalogError::InvalidPrice {
                    id: product.id,
                    price: product.price,
                });
            }
            if index.insert(product.id, position).is_some() {
                return Err(CatalogError::DuplicateId(product.id));
            }
        }
        debug!(size = products.len(), "Catalog loaded");
        Ok(Self { products, index })
    }

    /// The dessert shop catalog the storefront page ships with.
    pub fn desserts() -> Self {
        let products = vec![
            Product::new(1, "Vanilla Cupcakes (6 Pack)", 12.99, "Cupcake"),
            Product::new(2, "French Macaron", 3.99, "Macaron"),
            Product::new(3, "Pumpkin Cupcake", 3.99, "Cupcake"),
            Product::new(4, "Chocolate Cupcake", 5.99, "Cupcake"),
            Product::new(5, "Chocolate Pretzels (4 Pack)", 10.99, "Pretzel"),
            Product::new(6, "Strawberry Ice Cream", 2.99, "Ice Cream"),
            Product::new(7, "Chocolate Macarons (4 Pack)", 9.99, "Macaron"),
            Product::new(8, "Strawberry Pretzel", 4.99, "Pretzel"),
            Product::new(9, "Butter Pecan Ice Cream", 2.99, "Ice Cream"),
            Product::new(10, "Rocky Road Ice Cream", 2.99, "Ice Cream"),
            Product::new(11, "Vanilla Macarons (5 Pack)", 11.99, "Macaron"),
            Product::new(12, "Lemon Cupcakes (4 Pack)", 12.99, "Cupcake"),
        ];
        let index = products
            .iter()
            .enumerate()
            .map(|(position, product)| (product.id, position))
            .collect();
        Self { products, index }
    }

    /// Resolves a product id to its record.
    pub fn find(&self, id: ProductId) -> Option<&Product> {
        self.index.get(&id).map(|&position| &self.products[position])
    }

    /// Products in display order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_desserts_keep_display_order() {
        let catalog = Catalog::desserts();
        let ids: Vec<u32> = catalog.products().iter().map(|p| p.id.0).collect();
        assert_eq!(ids, (1..=12).collect::<Vec<_>>());
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_find_resolves_known_and_unknown_ids() {
        let catalog = Catalog::desserts();
        let product = catalog.find(ProductId(5)).expect("product 5 should exist");
        assert_eq!(product.name, "Chocolate Pretzels (4 Pack)");
        assert_eq!(product.price, 10.99);
        assert_eq!(product.category, "Pretzel");

        assert!(catalog.find(ProductId(0)).is_none());
        assert!(catalog.find(ProductId(13)).is_none());
    }

    #[test]
    fn test_new_rejects_duplicate_ids() {
        let result = Catalog::new(vec![
            Product::new(1, "A", 1.0, "X"),
            Product::new(1, "B", 2.0, "Y"),
        ]);
        assert_eq!(result.unwrap_err(), CatalogError::DuplicateId(ProductId(1)));
    }

    #[test]
    fn test_new_rejects_negative_and_nan_prices() {
        let negative = Catalog::new(vec![Product::new(1, "A", -0.01, "X")]);
        assert!(matches!(negative, Err(CatalogError::InvalidPrice { .. })));

        let nan = Catalog::new(vec![Product::new(2, "B", f64::NAN, "X")]);
        assert!(matches!(nan, Err(CatalogError::InvalidPrice { .. })));
    }

    #[test]
    fn test_new_accepts_free_products() {
        let catalog = Catalog::new(vec![Product::new(7, "Sample", 0.0, "Free")]).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.find(ProductId(7)).unwrap().price, 0.0);
    }
}
