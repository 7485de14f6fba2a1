//! Map-backed adapters for the order ports.
//!
//! Each adapter guards its state with a `tokio::sync::RwLock` so it can be
//! shared behind an `Arc`. Accessors such as [`InMemoryOrderRepo::orders`] let
//! callers inspect what the service stored.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use super::{CartRepo, Order, OrderError, OrderItem, OrderRepo, Product, ProductId, ProductRepo, UserId};

/// Product catalog keyed by product id.
#[derive(Default)]
pub struct InMemoryProductRepo {
    products: RwLock<HashMap<ProductId, Product>>,
}

impl InMemoryProductRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct products in the catalog.
    pub async fn len(&self) -> usize {
        self.products.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.products.read().await.is_empty()
    }
}

#[async_trait]
impl ProductRepo for InMemoryProductRepo {
    async fn import_products(&self, products: Vec<Product>) -> Result<(), OrderError> {
        let mut store = self.products.write().await;
        for product in products {
            store.insert(product.id.clone(), product);
        }
        debug!(size = store.len(), "Products imported");
        Ok(())
    }

    async fn get_product_by_id(&self, product_id: &ProductId) -> Result<Product, OrderError> {
        self.products
            .read()
            .await
            .get(product_id)
            .cloned()
            .ok_or_else(|| OrderError::ProductNotFound(product_id.clone()))
    }
}

/// Carts keyed by user id.
#[derive(Default)]
pub struct InMemoryCartRepo {
    carts: RwLock<HashMap<UserId, Vec<OrderItem>>>,
}

impl InMemoryCartRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a cart entry exists for the user (cleared carts do not).
    pub async fn has_cart(&self, user_id: &UserId) -> bool {
        self.carts.read().await.contains_key(user_id)
    }
}

#[async_trait]
impl CartRepo for InMemoryCartRepo {
    async fn add_item_to_cart(&self, user_id: &UserId, item: OrderItem) -> Result<(), OrderError> {
        self.carts.write().await.entry(user_id.clone()).or_default().push(item);
        Ok(())
    }

    async fn get_cart_items(&self, user_id: &UserId) -> Result<Vec<OrderItem>, OrderError> {
        Ok(self.carts.read().await.get(user_id).cloned().unwrap_or_default())
    }

    async fn clear_cart(&self, user_id: &UserId) -> Result<(), OrderError> {
        self.carts.write().await.remove(user_id);
        Ok(())
    }
}

/// Append-only list of saved orders.
#[derive(Default)]
pub struct InMemoryOrderRepo {
    orders: RwLock<Vec<Order>>,
}

impl InMemoryOrderRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every saved order, oldest first.
    pub async fn orders(&self) -> Vec<Order> {
        self.orders.read().await.clone()
    }
}

#[async_trait]
impl OrderRepo for InMemoryOrderRepo {
    async fn save_order(&self, order: Order) -> Result<(), OrderError> {
        let mut orders = self.orders.write().await;
        orders.push(order);
        debug!(size = orders.len(), "Order saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_import_upserts_by_id() {
        let repo = InMemoryProductRepo::new();
        repo.import_products(vec![
            Product::new("prod1", "Product 1", 10.0),
            Product::new("prod2", "Product 2", 20.0),
        ])
        .await
        .unwrap();
        assert_eq!(repo.len().await, 2);

        repo.import_products(vec![Product::new("prod1", "Product 1 v2", 12.0)]).await.unwrap();
        assert_eq!(repo.len().await, 2);

        let product = repo.get_product_by_id(&"prod1".into()).await.unwrap();
        assert_eq!(product.name, "Product 1 v2");
        assert_eq!(product.price, 12.0);
    }

    #[tokio::test]
    async fn test_missing_product_is_an_error() {
        let repo = InMemoryProductRepo::new();
        assert!(repo.is_empty().await);

        let err = repo.get_product_by_id(&"nope".into()).await.unwrap_err();
        assert_eq!(err, OrderError::ProductNotFound("nope".into()));
    }

    #[tokio::test]
    async fn test_cart_keeps_insertion_order_and_clears() {
        let repo = InMemoryCartRepo::new();
        let user: UserId = "user1".into();
        let first = OrderItem { product_id: "a".into(), quantity: 1, price: 1.0 };
        let second = OrderItem { product_id: "b".into(), quantity: 2, price: 2.0 };

        assert!(repo.get_cart_items(&user).await.unwrap().is_empty());
        repo.add_item_to_cart(&user, first.clone()).await.unwrap();
        repo.add_item_to_cart(&user, second.clone()).await.unwrap();
        assert_eq!(repo.get_cart_items(&user).await.unwrap(), vec![first, second]);

        repo.clear_cart(&user).await.unwrap();
        assert!(!repo.has_cart(&user).await);
        assert!(repo.get_cart_items(&user).await.unwrap().is_empty());
    }
}
