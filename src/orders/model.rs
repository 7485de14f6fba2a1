//! Domain types of the order service.
//!
//! Identifiers are newtypes so a [`UserId`] can never be passed where a
//! [`ProductId`] is expected.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for users placing orders.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub String);

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for UserId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Type-safe identifier for Products.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(pub String);

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub u64);

impl From<u64> for OrderId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// A catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
}

impl Product {
    /// Creates a new Product instance.
    ///
    /// # Arguments
    /// * `id` - Catalog identifier; importing another product with the same id replaces this one
    /// * `name` - Display name
    /// * `price` - Unit price
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
        }
    }
}

/// One line of a cart or order.
///
/// `price` is the unit price copied from the catalog when the item was added,
/// so later catalog changes do not affect carts already filled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub product_id: ProductId,
    pub quantity: u32,
    pub price: f64,
}

impl OrderItem {
    /// Line total (`price * quantity`).
    pub fn subtotal(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

/// A placed order.
///
/// Items and total are fixed at creation and never recomputed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    pub items: Vec<OrderItem>,
    pub total_amt: f64,
}

impl Order {
    /// Creates an order from a cart snapshot, computing the total.
    pub fn new(id: OrderId, user_id: UserId, items: Vec<OrderItem>) -> Self {
        let total_amt = items.iter().map(OrderItem::subtotal).sum();
        Self {
            id,
            user_id,
            items,
            total_amt,
        }
    }
}
