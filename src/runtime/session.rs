//! # Storefront Session
//!
//! The page's event loop. A [`StorefrontSession`] owns the [`StorefrontAdapter`] and the
//! receiving end of the action channel, and handles requests strictly one at a time.
//!
//! Because a single task owns the adapter, a click always runs to completion (including
//! any confirmation prompt) before the next one is looked at. No locks are involved.

use super::client::StorefrontClient;
use super::message::SessionRequest;
use crate::catalog::Catalog;
use crate::config::StorefrontConfig;
use crate::ledger::{CartLedger, Confirm};
use crate::presentation::{CartView, StorefrontAdapter};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

pub struct StorefrontSession<C> {
    receiver: mpsc::Receiver<SessionRequest>,
    adapter: StorefrontAdapter<C, CartView>,
}

impl<C: Confirm + Send + 'static> StorefrontSession<C> {
    /// Creates a session and the client used to talk to it.
    ///
    /// The session does nothing until [`run`](Self::run) is awaited.
    pub fn new(config: &StorefrontConfig, catalog: Catalog, confirm: C) -> (Self, StorefrontClient) {
        let (sender, receiver) = mpsc::channel(config.mailbox_capacity);
        let adapter = StorefrontAdapter::new(
            catalog,
            CartLedger::new(config.tax_rate),
            config.currency_symbol.clone(),
            confirm,
            CartView::empty(&config.currency_symbol),
        );
        (Self { receiver, adapter }, StorefrontClient::new(sender))
    }

    /// Processes requests until every client has been dropped.
    pub async fn run(mut self) {
        info!(
            products = self.adapter.catalog().len(),
            tax_rate = self.adapter.ledger().tax_rate(),
            "Session started"
        );

        while let Some(request) = self.receiver.recv().await {
            match request {
                SessionRequest::Action { action, respond_to } => {
                    let result = self
                        .adapter
                        .handle(action)
                        .map(|()| self.adapter.surface().clone());
                    if let Err(e) = &result {
                        warn!(?action, error = %e, "Action rejected");
                    }
                    let _ = respond_to.send(result);
                }
                SessionRequest::View { respond_to } => {
                    debug!("View requested");
                    let _ = respond_to.send(Ok(self.adapter.surface().clone()));
                }
            }
        }

        info!(
            items = self.adapter.ledger().count(),
            total = self.adapter.ledger().total(),
            "Session ended"
        );
    }
}
