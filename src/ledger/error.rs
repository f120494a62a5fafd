//! Error types for the cart ledger.

use crate::model::ProductId;
use thiserror::Error;

/// Errors that can occur during cart operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    /// The requested product is not in the catalog.
    #[error("Product not found: {0}")]
    NotFound(ProductId),
}
