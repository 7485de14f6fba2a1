//! Ports (traits) of the order service.
//!
//! The driving port [`OrderAppPort`] is what callers use. The driven ports
//! ([`ProductRepo`], [`CartRepo`], [`OrderRepo`], [`OrderPlacedNotifier`]) are
//! what [`OrderApp`](super::OrderApp) needs from the outside world.

use async_trait::async_trait;

use super::{Order, OrderError, OrderItem, Product, ProductId, UserId};

/// Driving port: operations offered to callers.
///
/// Inventory is not checked when placing orders.
#[async_trait]
pub trait OrderAppPort: Send + Sync {
    async fn import_products(&self, products: Vec<Product>) -> Result<(), OrderError>;

    async fn add_item_to_cart(
        &self,
        user_id: &UserId,
        product_id: &ProductId,
        quantity: u32,
    ) -> Result<(), OrderError>;

    async fn place_order(&self, user_id: &UserId) -> Result<Order, OrderError>;
}

/// Product catalog storage.
#[async_trait]
pub trait ProductRepo: Send + Sync {
    /// Inserts the products, replacing any existing entry with the same id.
    async fn import_products(&self, products: Vec<Product>) -> Result<(), OrderError>;

    /// Fails with [`OrderError::ProductNotFound`] when the id is unknown.
    async fn get_product_by_id(&self, product_id: &ProductId) -> Result<Product, OrderError>;
}

/// Per-user cart storage.
#[async_trait]
pub trait CartRepo: Send + Sync {
    /// Appends an item to the user's cart, creating the cart if needed.
    async fn add_item_to_cart(&self, user_id: &UserId, item: OrderItem) -> Result<(), OrderError>;

    /// Returns the cart contents in insertion order; empty if there is no cart.
    async fn get_cart_items(&self, user_id: &UserId) -> Result<Vec<OrderItem>, OrderError>;

    /// Deletes the user's cart.
    async fn clear_cart(&self, user_id: &UserId) -> Result<(), OrderError>;
}

/// Order storage.
#[async_trait]
pub trait OrderRepo: Send + Sync {
    async fn save_order(&self, order: Order) -> Result<(), OrderError>;
}

/// Outbound notification sent once an order has been saved.
#[async_trait]
pub trait OrderPlacedNotifier: Send + Sync {
    async fn notify_order_placed(&self, order: &Order) -> Result<(), OrderError>;
}
