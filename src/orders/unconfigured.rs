//! Stand-in adapters for capabilities the builder was never given.

use async_trait::async_trait;

use super::{CartRepo, Order, OrderError, OrderItem, OrderRepo, Product, ProductId, ProductRepo, UserId};

/// Fails every call with [`OrderError::NotConfigured`] naming the missing capability.
#[derive(Debug, Clone, Copy)]
pub struct Unconfigured(pub &'static str);

impl Unconfigured {
    fn fail<T>(&self) -> Result<T, OrderError> {
        Err(OrderError::NotConfigured(self.0))
    }
}

#[async_trait]
impl ProductRepo for Unconfigured {
    async fn import_products(&self, _products: Vec<Product>) -> Result<(), OrderError> {
        self.fail()
    }

    async fn get_product_by_id(&self, _product_id: &ProductId) -> Result<Product, OrderError> {
        self.fail()
    }
}

#[async_trait]
impl CartRepo for Unconfigured {
    async fn add_item_to_cart(&self, _user_id: &UserId, _item: OrderItem) -> Result<(), OrderError> {
        self.fail()
    }

    async fn get_cart_items(&self, _user_id: &UserId) -> Result<Vec<OrderItem>, OrderError> {
        self.fail()
    }

    async fn clear_cart(&self, _user_id: &UserId) -> Result<(), OrderError> {
        self.fail()
    }
}

#[async_trait]
impl OrderRepo for Unconfigured {
    async fn save_order(&self, _order: Order) -> Result<(), OrderError> {
        self.fail()
    }
}
