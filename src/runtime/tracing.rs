//! # Observability & Tracing
//!
//! Structured logging for the storefront.
//!
//! ```bash
//! # Cart mutations and session lifecycle
//! RUST_LOG=info cargo run
//!
//! # Every action, lookup and total recalculation
//! RUST_LOG=debug cargo run
//! ```
//!
//! With `RUST_LOG=info` a short session reads like:
//!
//! ```text
//! INFO Session started products=12 tax_rate=8.25
//! INFO add_to_cart{id=ProductId(1)}: Added to cart product_id=1 count=1 items=1
//! INFO add_to_cart{id=ProductId(1)}: Added to cart product_id=1 count=2 items=2
//! INFO clear_cart: Cart cleared removed=2
//! INFO Session ended items=0 total=0.0
//! ```

/// Initializes the tracing subscriber, filtered by `RUST_LOG`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
