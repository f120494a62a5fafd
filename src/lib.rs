//! # Dessert Cart
//!
//! > **The shopping cart behind a dessert shop listing page.**
//!
//! A fixed catalog of products, a cart that accumulates one entry per "add to cart"
//! click, running per-product counts, subtotal/tax/total, a Show/Hide toggle for the
//! cart panel, and a confirmed "clear cart".
//!
//! ## 🏗️ Design
//!
//! ### Ledger vs. Presentation
//! The [`ledger`] is pure state and arithmetic. It never renders and never opens a
//! dialog; confirmation is injected through the [`Confirm`](ledger::Confirm) trait.
//! The [`presentation`] adapter turns user actions into ledger commands and reports the
//! outcome as [`ViewUpdate`](presentation::ViewUpdate)s on a
//! [`RenderSurface`](presentation::RenderSurface). That split is what lets every cart
//! rule be tested without a page.
//!
//! ### One Click at a Time
//! The [`runtime`] runs a page as a single Tokio task that owns the adapter and drains
//! an action channel sequentially. Each action finishes, confirmation prompt included,
//! before the next one starts, so no locks are needed anywhere.
//!
//! ### Errors
//! Each module has its own `thiserror` enum. Adding an unknown product id is a
//! [`CartError::NotFound`](ledger::CartError::NotFound) and leaves the cart untouched.
//! An empty-cart clear and a declined clear are ordinary
//! [`ClearOutcome`](ledger::ClearOutcome)s, not errors.
//!
//! ### Observability
//! `tracing` everywhere with structured fields. See [`runtime::tracing`].
//!
//! ## 🗺️ Module Tour
//!
//! - [`model`] - `Product`, `ProductId`, `LineEntry`, `CartTotals`
//! - [`catalog`] - validated read-only product list, plus the dessert catalog
//! - [`ledger`] - `CartLedger`: entries, counts, tax and totals
//! - [`presentation`] - `StorefrontAdapter`, cart visibility, formatting, `CartView`
//! - [`runtime`] - `Storefront`, `StorefrontSession`, `StorefrontClient`
//! - [`config`] - `StorefrontConfig` with `STOREFRONT_*` overrides
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Replay a scripted shopping session with info logs
//! RUST_LOG=info cargo run
//!
//! cargo test
//! ```

pub mod catalog;
pub mod config;
pub mod ledger;
pub mod model;
pub mod presentation;
pub mod runtime;
