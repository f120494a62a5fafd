//! # Storefront Client
//!
//! Type-safe handle for submitting user actions to a running [`StorefrontSession`](super::StorefrontSession).

use super::error::SessionError;
use super::message::SessionRequest;
use crate::model::ProductId;
use crate::presentation::{CartView, UserAction};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

/// Cloneable handle to one storefront session.
///
/// Every method waits until the session has fully handled the request and returns the
/// view as it looks afterwards. Dropping the last client ends the session.
#[derive(Clone)]
pub struct StorefrontClient {
    sender: mpsc::Sender<SessionRequest>,
}

impl StorefrontClient {
    pub fn new(sender: mpsc::Sender<SessionRequest>) -> Self {
        Self { sender }
    }

    #[instrument(skip(self))]
    pub async fn add_to_cart(&self, id: ProductId) -> Result<CartView, SessionError> {
        self.dispatch(UserAction::AddToCart(id)).await
    }

    #[instrument(skip(self))]
    pub async fn toggle_cart(&self) -> Result<CartView, SessionError> {
        self.dispatch(UserAction::ToggleCart).await
    }

    #[instrument(skip(self))]
    pub async fn clear_cart(&self) -> Result<CartView, SessionError> {
        self.dispatch(UserAction::ClearCart).await
    }

    /// Sends any user action.
    pub async fn dispatch(&self, action: UserAction) -> Result<CartView, SessionError> {
        debug!(?action, "Sending request");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(SessionRequest::Action { action, respond_to })
            .await
            .map_err(|_| SessionError::SessionClosed)?;
        Ok(response.await.map_err(|_| SessionError::SessionDropped)??)
    }

    /// Current rendered view.
    pub async fn view(&self) -> Result<CartView, SessionError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(SessionRequest::View { respond_to })
            .await
            .map_err(|_| SessionError::SessionClosed)?;
        Ok(response.await.map_err(|_| SessionError::SessionDropped)??)
    }
}
