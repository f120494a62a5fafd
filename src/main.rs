//! Replays a short shopping session against the dessert catalog and logs the cart.

use dessert_cart::catalog::Catalog;
use dessert_cart::config::StorefrontConfig;
use dessert_cart::model::ProductId;
use dessert_cart::runtime::{setup_tracing, Storefront};
use tracing::{info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let config = StorefrontConfig::from_env()?;
    info!(?config, "Starting storefront");

    // Stands in for the browser dialog: accept every clear request.
    let confirm = |prompt: &str| {
        info!(prompt, "Confirmation requested, accepting");
        true
    };
    let storefront = Storefront::start(&config, Catalog::desserts(), confirm);
    let client = storefront.client.clone();

    let span = tracing::info_span!("shopping");
    async {
        client.toggle_cart().await?;
        for id in [1, 2, 1, 7] {
            client.add_to_cart(ProductId(id)).await?;
        }

        if let Err(e) = client.add_to_cart(ProductId(999)).await {
            warn!(error = %e, "Expected rejection for unknown product");
        }

        let view = client.view().await?;
        info!(
            items = %view.item_count,
            subtotal = %view.subtotal,
            tax = %view.tax,
            total = %view.total,
            "Cart contents"
        );
        for row in &view.rows {
            info!(name = %row.name, price = %row.price, badge = %row.badge, "Cart row");
        }

        let view = client.clear_cart().await?;
        info!(items = %view.item_count, "Cart after clear");
        client.clear_cart().await?;
        Ok::<_, dessert_cart::runtime::SessionError>(())
    }
    .instrument(span)
    .await?;

    drop(client);
    storefront.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
