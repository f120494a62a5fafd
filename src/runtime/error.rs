//! # Session Errors
//!
//! Errors seen by [`StorefrontClient`](super::StorefrontClient) callers. Cart errors
//! travel through unchanged; the rest describe the channel to the session task.

use crate::ledger::CartError;

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Session closed")]
    SessionClosed,
    #[error("Session dropped response channel")]
    SessionDropped,
    #[error("Session task failed: {0}")]
    TaskFailed(String),
    #[error(transparent)]
    Cart(#[from] CartError),
}
