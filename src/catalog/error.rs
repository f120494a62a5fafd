//! Error types for catalog construction.

use crate::model::ProductId;
use thiserror::Error;

/// Errors that can occur while building a [`Catalog`](super::Catalog).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    /// Two products share the same id.
    #[error("Duplicate product id: {0}")]
    DuplicateId(ProductId),

    /// A product price is negative or not a finite number.
    #[error("Invalid price for product {id}: {price}")]
    InvalidPrice { id: ProductId, price: f64 },
}
