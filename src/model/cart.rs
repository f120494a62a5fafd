//! Cart-side records: line entries and the derived money totals.

use super::product::{Product, ProductId};
use serde::Serialize;

/// One unit of a product in the cart.
///
/// The ledger appends one entry per "add to cart" click, so several entries may
/// reference the same product.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineEntry {
    pub product: Product,
}

impl LineEntry {
    pub fn new(product: Product) -> Self {
        Self { product }
    }

    pub fn product_id(&self) -> ProductId {
        self.product.id
    }

    pub fn price(&self) -> f64 {
        self.product.price
    }
}

/// Subtotal, tax and total as last computed by
/// [`CartLedger::calculate_total`](crate::ledger::CartLedger::calculate_total).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct CartTotals {
    pub subtotal: f64,
    pub tax: f64,
    pub total: f64,
}

/// Result of a successful add: the product that was added and how many
/// entries now reference it.
#[derive(Debug, Clone, PartialEq)]
pub struct AddedItem {
    pub product: Product,
    pub count: usize,
}

impl AddedItem {
    /// True when this add produced the first entry for the product.
    pub fn is_first(&self) -> bool {
        self.count == 1
    }
}
