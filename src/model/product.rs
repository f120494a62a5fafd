use serde::{Deserialize, Serialize};

use std::fmt::Display;

/// Type-safe identifier for Products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProductId(pub u32);

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Represents a product on the storefront listing page.
///
/// Products come from the static [`Catalog`](crate::catalog::Catalog) and are never
/// created or destroyed while a session runs. The cart only ever holds clones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub category: String,
}

impl Product {
    /// Creates a new Product instance.
    ///
    /// # Arguments
    /// * `id` - Unique, stable identifier
    /// * `name` - Display name
    /// * `price` - Unit price in the storefront currency
    /// * `category` - Free-form category label
    pub fn new(id: u32, name: impl Into<String>, price: f64, category: impl Into<String>) -> Self {
        Self {
            id: ProductId(id),
            name: name.into(),
            price,
            category: category.into(),
        }
    }
}
