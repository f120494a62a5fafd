//! # Render Surface
//!
//! The seam between the adapter and whatever actually shows the page.
//!
//! The adapter never writes text itself; it emits [`ViewUpdate`]s. [`CartView`] is the
//! in-memory surface used by the session and by tests: it keeps the current text of
//! every field the page displays.

use super::format::{escape_html, format_currency};
use crate::model::ProductId;
use serde::Serialize;

/// One change to the rendered page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ViewUpdate {
    /// Total item count label.
    ItemCount(String),
    /// Money fields, already formatted.
    Totals {
        subtotal: String,
        tax: String,
        total: String,
    },
    /// A new cart row for a product seen for the first time.
    RowCreated {
        id: ProductId,
        name: String,
        price: String,
    },
    /// The quantity badge of an existing row.
    BadgeUpdated { id: ProductId, badge: String },
    /// All cart rows removed.
    RowsCleared,
    /// Show/Hide toggle label and cart panel visibility.
    Visibility { label: String, shown: bool },
    /// An informational message for the user.
    Notice(String),
}

/// Anything that can display view updates.
pub trait RenderSurface {
    fn apply(&mut self, update: &ViewUpdate);
}

/// A rendered cart row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartRow {
    pub id: ProductId,
    pub name: String,
    pub price: String,
    pub badge: String,
}

impl CartRow {
    /// Markup for this row inside the cart panel.
    pub fn markup(&self) -> String {
        format!(
            concat!(
                "<div id=\"dessert{id}\" class=\"product\">\n",
                "  <p><span class=\"product-count\" id=\"product-count-for-id{id}\">{badge}</span>{name}</p>\n",
                "  <p>{price}</p>\n",
                "</div>\n",
            ),
            id = self.id,
            badge = escape_html(&self.badge),
            name = escape_html(&self.name),
            price = escape_html(&self.price),
        )
    }
}

/// In-memory copy of everything the storefront page shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartView {
    pub item_count: String,
    pub subtotal: String,
    pub tax: String,
    pub total: String,
    pub rows: Vec<CartRow>,
    pub toggle_label: String,
    pub panel_shown: bool,
    pub notices: Vec<String>,
}

impl Default for CartView {
    fn default() -> Self {
        Self::empty("$")
    }
}

impl CartView {
    /// An empty, hidden cart with money fields zeroed in `currency_symbol`.
    pub fn empty(currency_symbol: &str) -> Self {
        let zero = format_currency(currency_symbol, 0.0);
        Self {
            item_count: "0".to_string(),
            subtotal: zero.clone(),
            tax: zero.clone(),
            total: zero,
            rows: Vec::new(),
            toggle_label: "Show".to_string(),
            panel_shown: false,
            notices: Vec::new(),
        }
    }

    pub fn row(&self, id: ProductId) -> Option<&CartRow> {
        self.rows.iter().find(|row| row.id == id)
    }

    /// Markup for the cart rows, in the order they were first added.
    pub fn rows_markup(&self) -> String {
        self.rows.iter().map(CartRow::markup).collect()
    }
}

impl RenderSurface for CartView {
    fn apply(&mut self, update: &ViewUpdate) {
        match update {
            ViewUpdate::ItemCount(count) => self.item_count = count.clone(),
            ViewUpdate::Totals {
                subtotal,
                tax,
                total,
            } => {
                self.subtotal = subtotal.clone();
                self.tax = tax.clone();
                self.total = total.clone();
            }
            ViewUpdate::RowCreated { id, name, price } => self.rows.push(CartRow {
                id: *id,
                name: name.clone(),
                price: price.clone(),
                badge: String::new(),
            }),
            ViewUpdate::BadgeUpdated { id, badge } => {
                if let Some(row) = self.rows.iter_mut().find(|row| row.id == *id) {
                    row.badge = badge.clone();
                }
            }
            ViewUpdate::RowsCleared => self.rows.clear(),
            ViewUpdate::Visibility { label, shown } => {
                self.toggle_label = label.clone();
                self.panel_shown = *shown;
            }
            ViewUpdate::Notice(message) => self.notices.push(message.clone()),
        }
    }
}

/// Records every update it receives, in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub updates: Vec<ViewUpdate>,
}

impl RenderSurface for RecordingSurface {
    fn apply(&mut self, update: &ViewUpdate) {
        self.updates.push(update.clone());
    }
}
