//! # Presentation Adapter
//!
//! One-way binding between the [`CartLedger`] and the page.
//!
//! ## Overview
//!
//! [`StorefrontAdapter`] reads [`UserAction`]s, turns them into ledger commands, and
//! reports what changed as [`ViewUpdate`]s on a [`RenderSurface`]. It also owns the only
//! piece of pure UI state, the cart panel [`Visibility`].
//!
//! ## Structure
//!
//! - [`format`] - currency strings, quantity badges and catalog markup
//! - [`surface`] - the [`RenderSurface`] seam and the in-memory [`CartView`]
//!
//! ## Usage
//!
//! ```rust
//! use dessert_cart::catalog::Catalog;
//! use dessert_cart::ledger::{AutoConfirm, CartLedger};
//! use dessert_cart::model::ProductId;
//! use dessert_cart::presentation::{CartView, StorefrontAdapter, UserAction};
//!
//! let mut adapter = StorefrontAdapter::new(
//!     Catalog::desserts(),
//!     CartLedger::new(8.25),
//!     "$",
//!     AutoConfirm(true),
//!     CartView::default(),
//! );
//!
//! adapter.handle(UserAction::AddToCart(ProductId(2))).unwrap();
//! adapter.handle(UserAction::AddToCart(ProductId(2))).unwrap();
//!
//! let view = adapter.surface();
//! assert_eq!(view.item_count, "2");
//! assert_eq!(view.rows[0].badge, "2x");
//! assert_eq!(view.subtotal, "$7.98");
//! ```

pub mod format;
pub mod surface;

pub use format::*;
pub use surface::*;

use crate::catalog::Catalog;
use crate::ledger::{CartError, CartLedger, ClearOutcome, Confirm, EMPTY_CART_NOTICE};
use crate::model::ProductId;
use tracing::{debug, info, warn};

/// The user input surface of the storefront page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserAction {
    /// "Add to cart" on a product card.
    AddToCart(ProductId),
    /// The Show/Hide cart button.
    ToggleCart,
    /// The clear cart button. Gated by confirmation.
    ClearCart,
}

/// Cart panel visibility. Starts [`Hidden`](Visibility::Hidden).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Hidden,
    Shown,
}

impl Visibility {
    pub fn toggled(self) -> Self {
        match self {
            Visibility::Hidden => Visibility::Shown,
            Visibility::Shown => Visibility::Hidden,
        }
    }

    pub fn is_shown(self) -> bool {
        self == Visibility::Shown
    }

    /// Text of the toggle button: what pressing it would do.
    pub fn label(self) -> &'static str {
        match self {
            Visibility::Hidden => "Show",
            Visibility::Shown => "Hide",
        }
    }
}

/// Drives a [`CartLedger`] from user actions and renders the results.
pub struct StorefrontAdapter<C, S> {
    catalog: Catalog,
    ledger: CartLedger,
    currency_symbol: String,
    visibility: Visibility,
    confirm: C,
    surface: S,
}

impl<C: Confirm, S: RenderSurface> StorefrontAdapter<C, S> {
    pub fn new(
        catalog: Catalog,
        ledger: CartLedger,
        currency_symbol: impl Into<String>,
        confirm: C,
        surface: S,
    ) -> Self {
        Self {
            catalog,
            ledger,
            currency_symbol: currency_symbol.into(),
            visibility: Visibility::default(),
            confirm,
            surface,
        }
    }

    /// Applies one user action to completion.
    ///
    /// # Errors
    /// [`CartError::NotFound`] when an add names a product the catalog does not have.
    /// Nothing is rendered in that case.
    pub fn handle(&mut self, action: UserAction) -> Result<(), CartError> {
        debug!(?action, "Handling user action");
        match action {
            UserAction::AddToCart(id) => self.add_to_cart(id),
            UserAction::ToggleCart => {
                self.toggle_cart();
                Ok(())
            }
            UserAction::ClearCart => {
                self.clear_cart();
                Ok(())
            }
        }
    }

    fn add_to_cart(&mut self, id: ProductId) -> Result<(), CartError> {
        let added = self.ledger.add_item(id, &self.catalog).inspect_err(|e| {
            warn!(product_id = %id, error = %e, "Add to cart failed");
        })?;

        self.emit(ViewUpdate::ItemCount(self.ledger.count().to_string()));
        if added.is_first() {
            self.emit(ViewUpdate::RowCreated {
                id,
                name: added.product.name.clone(),
                price: self.money(added.product.price),
            });
        } else {
            self.emit(ViewUpdate::BadgeUpdated {
                id,
                badge: quantity_badge(added.count),
            });
        }

        self.ledger.calculate_total();
        self.emit_totals();
        info!(product_id = %id, count = added.count, items = self.ledger.count(), "Added to cart");
        Ok(())
    }

    fn toggle_cart(&mut self) {
        self.visibility = self.visibility.toggled();
        debug!(visibility = ?self.visibility, "Cart toggled");
        self.emit(ViewUpdate::Visibility {
            label: self.visibility.label().to_string(),
            shown: self.visibility.is_shown(),
        });
    }

    fn clear_cart(&mut self) {
        match self.ledger.clear_cart(&mut self.confirm) {
            ClearOutcome::Cleared => {
                self.emit(ViewUpdate::RowsCleared);
                self.emit(ViewUpdate::ItemCount("0".to_string()));
                self.emit(ViewUpdate::Totals {
                    subtotal: self.money(0.0),
                    tax: self.money(0.0),
                    total: self.money(0.0),
                });
            }
            ClearOutcome::AlreadyEmpty => {
                self.emit(ViewUpdate::Notice(EMPTY_CART_NOTICE.to_string()));
            }
            ClearOutcome::Declined => {}
        }
    }

    fn emit_totals(&mut self) {
        let totals = self.ledger.totals();
        self.emit(ViewUpdate::Totals {
            subtotal: self.money(totals.subtotal),
            tax: self.money(totals.tax),
            total: self.money(totals.total),
        });
    }

    fn emit(&mut self, update: ViewUpdate) {
        self.surface.apply(&update);
    }

    fn money(&self, amount: f64) -> String {
        format_currency(&self.currency_symbol, amount)
    }

    /// Markup for the catalog grid.
    pub fn render_catalog(&self) -> String {
        product_grid(&self.currency_symbol, self.catalog.products())
    }

    pub fn ledger(&self) -> &CartLedger {
        &self.ledger
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}
