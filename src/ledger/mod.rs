//! # Cart Ledger
//!
//! The in-memory record of everything added to the cart, plus the derived money totals.
//!
//! ## Overview
//!
//! [`CartLedger`] is pure state and computation: it never renders anything and never
//! talks to a dialog directly. Every "add to cart" click appends one [`LineEntry`], so
//! quantity is expressed by repetition. A per-product counter is kept next to the entries
//! and updated in O(1) on each add and on clear.
//!
//! ## Totals
//!
//! Totals are recomputed only by [`CartLedger::calculate_total`]. Adding an item leaves
//! the stored totals stale until the caller asks for them again:
//!
//! ```rust
//! use dessert_cart::catalog::Catalog;
//! use dessert_cart::ledger::CartLedger;
//! use dessert_cart::model::ProductId;
//!
//! let catalog = Catalog::desserts();
//! let mut ledger = CartLedger::new(8.25);
//!
//! ledger.add_item(ProductId(1), &catalog).unwrap();
//! assert_eq!(ledger.total(), 0.0);
//!
//! let total = ledger.calculate_total();
//! assert!((total - 14.06).abs() < 1e-9);
//! ```
//!
//! ## Clearing
//!
//! [`CartLedger::clear_cart`] goes through an injected [`Confirm`]. An empty cart never
//! prompts; a declined prompt leaves every field exactly as it was.

pub mod confirm;
pub mod error;

pub use confirm::*;
pub use error::*;

use crate::catalog::Catalog;
use crate::model::{AddedItem, CartTotals, LineEntry, ProductId};
use std::collections::HashMap;
use tracing::{debug, info};

/// Prompt shown before a non-empty cart is cleared.
pub const CLEAR_CART_PROMPT: &str =
    "Are you sure you want to clear all items from your shopping cart?";

/// Notice shown when clearing a cart that holds nothing.
pub const EMPTY_CART_NOTICE: &str = "Your cart is already empty!";

/// What a clear request ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearOutcome {
    /// The user confirmed and the ledger was reset.
    Cleared,
    /// There was nothing to clear. No prompt was shown.
    AlreadyEmpty,
    /// The user declined the prompt. Nothing changed.
    Declined,
}

impl ClearOutcome {
    pub fn is_cleared(self) -> bool {
        matches!(self, ClearOutcome::Cleared)
    }
}

/// Cent values are snapped to this many fractional digits before the final rounding.
const CENT_SNAP: f64 = 1e6;

/// Rounds half away from zero to two decimal places.
///
/// Halves such as `8.415` have no exact `f64` form and land just below the midpoint
/// once scaled to cents. Snapping the scaled value to a few decimal digits first puts
/// them back on the midpoint, so the final `round` sees the decimal value.
pub fn round2(amount: f64) -> f64 {
    let cents = (amount * 100.0 * CENT_SNAP).round() / CENT_SNAP;
    cents.round() / 100.0
}

#[derive(Debug, Clone)]
pub struct CartLedger {
    entries: Vec<LineEntry>,
    counts: HashMap<ProductId, usize>,
    tax_rate: f64,
    totals: CartTotals,
}

impl CartLedger {
    /// Creates an empty ledger.
    ///
    /// # Arguments
    /// * `tax_rate` - Tax as a percentage, e.g. `8.25` for 8.25%
    pub fn new(tax_rate: f64) -> Self {
        Self {
            entries: Vec::new(),
            counts: HashMap::new(),
            tax_rate,
            totals: CartTotals::default(),
        }
    }

    /// Appends one entry for `product_id`.
    ///
    /// Totals are not recomputed here; call [`calculate_total`](Self::calculate_total).
    ///
    /// # Errors
    /// [`CartError::NotFound`] if the catalog has no such product. The ledger is untouched.
    pub fn add_item(
        &mut self,
        product_id: ProductId,
        catalog: &Catalog,
    ) -> Result<AddedItem, CartError> {
        let Some(product) = catalog.find(product_id) else {
            debug!(%product_id, "Product not in catalog");
            return Err(CartError::NotFound(product_id));
        };

        self.entries.push(LineEntry::new(product.clone()));
        let count = self.counts.entry(product_id).or_insert(0);
        *count += 1;

        debug!(%product_id, count = *count, items = self.entries.len(), "Item added");
        Ok(AddedItem {
            product: product.clone(),
            count: *count,
        })
    }

    /// Total number of entries across all products.
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// Number of entries referencing `product_id`.
    pub fn count_for(&self, product_id: ProductId) -> usize {
        self.counts.get(&product_id).copied().unwrap_or(0)
    }

    pub fn per_product_counts(&self) -> &HashMap<ProductId, usize> {
        &self.counts
    }

    /// Empties the ledger after asking `confirm`.
    ///
    /// Returns [`ClearOutcome::AlreadyEmpty`] without prompting when there is nothing
    /// to clear.
    pub fn clear_cart(&mut self, confirm: &mut dyn Confirm) -> ClearOutcome {
        if self.entries.is_empty() {
            info!("{}", EMPTY_CART_NOTICE);
            return ClearOutcome::AlreadyEmpty;
        }

        if !confirm.confirm(CLEAR_CART_PROMPT) {
            info!(items = self.entries.len(), "Clear declined");
            return ClearOutcome::Declined;
        }

        let removed = self.entries.len();
        self.entries.clear();
        self.counts.clear();
        self.totals = CartTotals::default();
        info!(removed, "Cart cleared");
        ClearOutcome::Cleared
    }

    /// Tax owed on `amount` at this ledger's rate, rounded to cents.
    pub fn calculate_tax(&self, amount: f64) -> f64 {
        round2(amount * self.tax_rate / 100.0)
    }

    /// Recomputes subtotal, tax and total from the current entries and returns the total.
    pub fn calculate_total(&mut self) -> f64 {
        let subtotal: f64 = self.entries.iter().map(LineEntry::price).sum();
        let tax = self.calculate_tax(subtotal);
        self.totals = CartTotals {
            subtotal,
            tax,
            total: subtotal + tax,
        };
        debug!(subtotal, tax, total = self.totals.total, "Totals recalculated");
        self.totals.total
    }

    pub fn entries(&self) -> &[LineEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn tax_rate(&self) -> f64 {
        self.tax_rate
    }

    pub fn totals(&self) -> CartTotals {
        self.totals
    }

    pub fn subtotal(&self) -> f64 {
        self.totals.subtotal
    }

    pub fn tax(&self) -> f64 {
        self.totals.tax
    }

    pub fn total(&self) -> f64 {
        self.totals.total
    }
}
