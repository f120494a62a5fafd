use dessert_cart::catalog::Catalog;
use dessert_cart::config::StorefrontConfig;
use dessert_cart::ledger::{AutoConfirm, CartError, EMPTY_CART_NOTICE};
use dessert_cart::model::{Product, ProductId};
use dessert_cart::runtime::{SessionError, Storefront};
use std::collections::VecDeque;

fn two_product_catalog() -> Catalog {
    Catalog::new(vec![
        Product::new(1, "Vanilla Cupcakes (6 Pack)", 12.99, "Cupcake"),
        Product::new(2, "French Macaron", 3.99, "Macaron"),
    ])
    .expect("valid catalog")
}

/// End-to-end: add 1, 2, 1 through a real session and check the rendered cart.
#[tokio::test]
async fn test_add_items_renders_rows_badges_and_totals() {
    let storefront = Storefront::start(
        &StorefrontConfig::default(),
        two_product_catalog(),
        AutoConfirm(true),
    );
    let client = storefront.client.clone();

    client.add_to_cart(ProductId(1)).await.expect("add 1");
    client.add_to_cart(ProductId(2)).await.expect("add 2");
    let view = client.add_to_cart(ProductId(1)).await.expect("add 1 again");

    assert_eq!(view.item_count, "3");
    assert_eq!(view.rows.len(), 2, "Each product gets exactly one row");
    assert_eq!(view.rows[0].name, "Vanilla Cupcakes (6 Pack)");
    assert_eq!(view.rows[0].price, "$12.99");
    assert_eq!(view.rows[0].badge, "2x");
    assert_eq!(view.rows[1].badge, "", "A single unit shows no badge");
    assert_eq!(view.subtotal, "$29.97");
    assert_eq!(view.tax, "$2.47");
    assert_eq!(view.total, "$32.44");

    drop(client);
    storefront.shutdown().await.expect("Failed to shutdown");
}

#[tokio::test]
async fn test_unknown_product_is_rejected_without_changes() {
    let storefront = Storefront::start(
        &StorefrontConfig::default(),
        two_product_catalog(),
        AutoConfirm(true),
    );
    let client = storefront.client.clone();

    let before = client.add_to_cart(ProductId(2)).await.unwrap();
    let result = client.add_to_cart(ProductId(999)).await;

    assert!(matches!(
        result,
        Err(SessionError::Cart(CartError::NotFound(ProductId(999))))
    ));
    let after = client.view().await.unwrap();
    assert_eq!(before, after, "Rejected add must not touch the view");

    drop(client);
    storefront.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_toggle_cart_visibility() {
    let storefront = Storefront::start(
        &StorefrontConfig::default(),
        two_product_catalog(),
        AutoConfirm(true),
    );
    let client = storefront.client.clone();

    let initial = client.view().await.unwrap();
    assert!(!initial.panel_shown);
    assert_eq!(initial.toggle_label, "Show");

    let shown = client.toggle_cart().await.unwrap();
    assert!(shown.panel_shown);
    assert_eq!(shown.toggle_label, "Hide");

    let hidden = client.toggle_cart().await.unwrap();
    assert!(!hidden.panel_shown);
    assert_eq!(hidden.toggle_label, "Show");

    drop(client);
    storefront.shutdown().await.unwrap();
}

/// Clear flow: empty notice, then a declined prompt, then an accepted one.
#[tokio::test]
async fn test_clear_cart_flow() {
    let mut answers = VecDeque::from([false, true]);
    let confirm = move |_: &str| answers.pop_front().unwrap_or(false);
    let storefront = Storefront::start(&StorefrontConfig::default(), two_product_catalog(), confirm);
    let client = storefront.client.clone();

    let view = client.clear_cart().await.unwrap();
    assert_eq!(view.notices, vec![EMPTY_CART_NOTICE.to_string()]);
    assert_eq!(view.item_count, "0");

    client.add_to_cart(ProductId(1)).await.unwrap();
    let before = client.add_to_cart(ProductId(2)).await.unwrap();

    let declined = client.clear_cart().await.unwrap();
    assert_eq!(declined, before, "Declined clear must leave the cart unchanged");

    let cleared = client.clear_cart().await.unwrap();
    assert!(cleared.rows.is_empty());
    assert_eq!(cleared.item_count, "0");
    assert_eq!(cleared.subtotal, "$0.00");
    assert_eq!(cleared.tax, "$0.00");
    assert_eq!(cleared.total, "$0.00");

    let after = client.add_to_cart(ProductId(2)).await.unwrap();
    assert_eq!(after.item_count, "1");
    assert_eq!(after.rows.len(), 1, "Cleared cart starts rows from scratch");
    assert_eq!(after.total, "$4.32");

    drop(client);
    storefront.shutdown().await.unwrap();
}

/// Actions from many clients are applied one at a time; none are lost.
#[tokio::test]
async fn test_concurrent_clicks_are_serialized() {
    let storefront = Storefront::start(
        &StorefrontConfig::default(),
        Catalog::desserts(),
        AutoConfirm(true),
    );

    let mut handles = vec![];
    for i in 0..24u32 {
        let client = storefront.client.clone();
        handles.push(tokio::spawn(async move {
            client.add_to_cart(ProductId(i % 12 + 1)).await
        }));
    }
    for handle in handles {
        handle.await.unwrap().expect("add should succeed");
    }

    let view = storefront.client.view().await.unwrap();
    assert_eq!(view.item_count, "24");
    assert_eq!(view.rows.len(), 12);
    assert!(view.rows.iter().all(|row| row.badge == "2x"));

    storefront.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_currency_symbol_and_tax_rate_from_config() {
    let config = StorefrontConfig {
        tax_rate: 10.0,
        currency_symbol: "€".to_string(),
        ..StorefrontConfig::default()
    };
    let storefront = Storefront::start(&config, two_product_catalog(), AutoConfirm(true));

    let initial = storefront.client.view().await.unwrap();
    assert_eq!(initial.total, "€0.00");

    let view = storefront.client.add_to_cart(ProductId(2)).await.unwrap();
    assert_eq!(view.subtotal, "€3.99");
    assert_eq!(view.tax, "€0.40");
    assert_eq!(view.total, "€4.39");

    storefront.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_shutdown_waits_for_outstanding_clients() {
    let storefront = Storefront::start(
        &StorefrontConfig::default(),
        two_product_catalog(),
        AutoConfirm(true),
    );
    let client = storefront.client.clone();
    let view = client.view().await.unwrap();
    assert_eq!(view.item_count, "0");

    // Session stays alive while a client clone exists, so shut down from another task.
    let shutdown = tokio::spawn(storefront.shutdown());
    drop(client);
    shutdown.await.unwrap().unwrap();
}
