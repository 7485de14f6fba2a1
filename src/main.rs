//! Demo entry point.
//!
//! 1. Loads [`AppConfig`] and sets up tracing.
//! 2. Greets a user through the logging decorator.
//! 3. Wires an [`OrderApp`] with in-memory adapters and the configured notifiers,
//!    then imports a product, fills a cart and places an order.

use std::sync::Arc;

use hexagonal_recipe::greeting::{HelloService, InMemoryUserNameRepository, LoggingUserNameRepository};
use hexagonal_recipe::orders::{
    InMemoryCartRepo, InMemoryOrderRepo, InMemoryProductRepo, OrderApp, Product, UserId,
};
use hexagonal_recipe::runtime::{setup_tracing, AppConfig};
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    let config = AppConfig::from_env().map_err(|e| e.to_string())?;
    setup_tracing(&config.log_filter);

    info!(notifiers = ?config.notifiers, "Starting demo");

    // Greeting
    let users = InMemoryUserNameRepository::from_iter([(1, "Alice")]);
    let hello = HelloService::new(LoggingUserNameRepository::new(users));
    let message = hello.say_hello(1).await.map_err(|e| e.to_string())?;
    info!(%message, "Greeting ready");

    // Orders
    let notifier = config.order_notifier();
    info!(channels = notifier.len(), "Order notifier wired");

    let app = OrderApp::builder()
        .with_product_repo(Arc::new(InMemoryProductRepo::new()))
        .with_cart_repo(Arc::new(InMemoryCartRepo::new()))
        .with_order_repo(Arc::new(InMemoryOrderRepo::new()))
        .with_order_placed_notifier(Arc::new(notifier))
        .build();

    let user_id = UserId::from("user1");
    let span = tracing::info_span!("order_processing");
    let order_result = async {
        app.import_products(vec![
            Product::new("prod1", "Product 1", 10.0),
            Product::new("prod2", "Product 2", 20.0),
        ])
        .await?;
        app.add_item_to_cart(&user_id, &"prod1".into(), 2).await?;
        app.place_order(&user_id).await
    }
    .instrument(span)
    .await;

    match order_result {
        Ok(order) => info!(order_id = %order.id, total = order.total_amt, "Order processed successfully"),
        Err(e) => {
            error!(error = %e, "Order processing failed");
            return Err(e.to_string());
        }
    }

    info!("Demo completed successfully");
    Ok(())
}
