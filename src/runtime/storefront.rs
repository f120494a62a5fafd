use super::client::StorefrontClient;
use super::error::SessionError;
use super::session::StorefrontSession;
use crate::catalog::Catalog;
use crate::config::StorefrontConfig;
use crate::ledger::Confirm;
use tracing::{error, info};

/// A running storefront page: the session task plus its client.
///
/// # Example
///
/// ```rust
/// use dessert_cart::catalog::Catalog;
/// use dessert_cart::config::StorefrontConfig;
/// use dessert_cart::ledger::AutoConfirm;
/// use dessert_cart::model::ProductId;
/// use dessert_cart::runtime::Storefront;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let storefront = Storefront::start(&StorefrontConfig::default(), Catalog::desserts(), AutoConfirm(true));
///
///     let view = storefront.client.add_to_cart(ProductId(1)).await?;
///     assert_eq!(view.total, "$14.06");
///
///     storefront.shutdown().await?;
///     Ok(())
/// }
/// ```
pub struct Storefront {
    /// Client for submitting user actions.
    pub client: StorefrontClient,

    handle: tokio::task::JoinHandle<()>,
}

impl Storefront {
    /// Spawns the session task. Must be called from within a Tokio runtime.
    pub fn start<C>(config: &StorefrontConfig, catalog: Catalog, confirm: C) -> Self
    where
        C: Confirm + Send + 'static,
    {
        let (session, client) = StorefrontSession::new(config, catalog, confirm);
        let handle = tokio::spawn(session.run());
        Self { client, handle }
    }

    /// Closes the session and waits for its task to finish.
    ///
    /// Clients cloned from [`client`](Self::client) keep the session alive until they
    /// are dropped too.
    pub async fn shutdown(self) -> Result<(), SessionError> {
        info!("Shutting down storefront...");
        drop(self.client);

        if let Err(e) = self.handle.await {
            error!("Session task failed: {:?}", e);
            return Err(SessionError::TaskFailed(e.to_string()));
        }

        info!("Storefront shutdown complete.");
        Ok(())
    }
}
