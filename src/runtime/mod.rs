//! Runtime orchestration for a storefront page.
//!
//! # Main Components
//!
//! - [`Storefront`] - spawns the session and shuts it down
//! - [`StorefrontSession`] - the sequential event loop that owns the cart
//! - [`StorefrontClient`] - cloneable handle for submitting user actions
//! - [`setup_tracing`] - initializes logging

pub mod client;
pub mod error;
pub mod message;
pub mod session;
pub mod storefront;
pub mod tracing;

pub use client::*;
pub use error::*;
pub use message::*;
pub use session::*;
pub use storefront::*;
pub use self::tracing::*;
