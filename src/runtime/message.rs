//! Messages sent from [`StorefrontClient`](super::StorefrontClient) to the session task.

use crate::ledger::CartError;
use crate::presentation::{CartView, UserAction};
use tokio::sync::oneshot;

/// One-shot reply carrying the rendered view after the request ran.
pub type Reply = oneshot::Sender<Result<CartView, CartError>>;

#[derive(Debug)]
pub enum SessionRequest {
    /// Run a user action to completion, then reply with the view.
    Action { action: UserAction, respond_to: Reply },
    /// Reply with the current view without changing anything.
    View { respond_to: Reply },
}
