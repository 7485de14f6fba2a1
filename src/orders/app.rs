//! # Order Application Service
//!
//! [`OrderApp`] wires four capabilities together:
//!
//! | Capability              | Used by                                   |
//! |-------------------------|-------------------------------------------|
//! | [`ProductRepo`]         | `import_products`, `add_item_to_cart`     |
//! | [`CartRepo`]            | `add_item_to_cart`, `place_order`         |
//! | [`OrderRepo`]           | `place_order`                             |
//! | [`OrderPlacedNotifier`] | `place_order` (optional)                  |
//!
//! Build one with [`OrderApp::builder`], passing only the capabilities the calls you
//! make actually need:
//!
//! ```rust,ignore
//! let products = Arc::new(InMemoryProductRepo::new());
//! let app = OrderApp::builder()
//!     .with_product_repo(products.clone())
//!     .build();
//! app.import_products(vec![Product::new("prod1", "Product 1", 10.0)]).await?;
//! ```
//!
//! A repository left out is replaced by [`Unconfigured`], so calling an operation that
//! needs it returns [`OrderError::NotConfigured`] instead of panicking.
//!
//! ## Placing an order
//!
//! `place_order` runs these steps in order and stops at the first error:
//!
//! 1. read the cart
//! 2. build the order (next id, snapshot items, compute total)
//! 3. save the order
//! 4. clear the cart
//! 5. notify, if a notifier is configured
//!
//! Completed steps are not undone when a later one fails. A saved order whose cart
//! could not be cleared, or whose notification failed, stays saved; the failure is
//! logged at `warn` with the order id.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, instrument, warn};

use super::{
    CartRepo, Order, OrderAppPort, OrderError, OrderId, OrderItem, OrderPlacedNotifier, OrderRepo,
    Product, ProductId, ProductRepo, Unconfigured, UserId,
};

type NextOrderId = Box<dyn Fn() -> OrderId + Send + Sync>;

/// The order application service.
pub struct OrderApp {
    product_repo: Arc<dyn ProductRepo>,
    cart_repo: Arc<dyn CartRepo>,
    order_repo: Arc<dyn OrderRepo>,
    order_placed_notifier: Option<Arc<dyn OrderPlacedNotifier>>,
    next_order_id: NextOrderId,
}

impl OrderApp {
    pub fn builder() -> OrderAppBuilder {
        OrderAppBuilder::default()
    }

    /// Adds products to the catalog. Upsert semantics are up to the repository.
    #[instrument(skip(self, products), fields(count = products.len()))]
    pub async fn import_products(&self, products: Vec<Product>) -> Result<(), OrderError> {
        debug!(?products, "import_products called");
        self.product_repo.import_products(products).await
    }

    /// Puts `quantity` units of a product in the user's cart at the current catalog price.
    #[instrument(skip(self))]
    pub async fn add_item_to_cart(
        &self,
        user_id: &UserId,
        product_id: &ProductId,
        quantity: u32,
    ) -> Result<(), OrderError> {
        if quantity == 0 {
            return Err(OrderError::InvalidQuantity(quantity));
        }

        let product = self.product_repo.get_product_by_id(product_id).await?;
        let item = OrderItem {
            product_id: product.id,
            quantity,
            price: product.price,
        };
        self.cart_repo.add_item_to_cart(user_id, item).await?;
        debug!(price = product.price, "Item added to cart");
        Ok(())
    }

    /// Turns the user's cart into a saved order and returns it.
    #[instrument(skip(self))]
    pub async fn place_order(&self, user_id: &UserId) -> Result<Order, OrderError> {
        let items = self.cart_repo.get_cart_items(user_id).await?;
        let order = Order::new((self.next_order_id)(), user_id.clone(), items);
        debug!(?order, "Order built");

        self.order_repo.save_order(order.clone()).await?;
        info!(order_id = %order.id, total = order.total_amt, "Order saved");

        if let Err(e) = self.cart_repo.clear_cart(user_id).await {
            warn!(order_id = %order.id, error = %e, "Order saved but cart not cleared");
            return Err(e);
        }

        match &self.order_placed_notifier {
            Some(notifier) => {
                if let Err(e) = notifier.notify_order_placed(&order).await {
                    warn!(order_id = %order.id, error = %e, "Order saved but notification failed");
                    return Err(e);
                }
                info!(order_id = %order.id, "Order placed");
            }
            None => debug!(order_id = %order.id, "No notifier configured"),
        }

        Ok(order)
    }
}

#[async_trait]
impl OrderAppPort for OrderApp {
    async fn import_products(&self, products: Vec<Product>) -> Result<(), OrderError> {
        OrderApp::import_products(self, products).await
    }

    async fn add_item_to_cart(
        &self,
        user_id: &UserId,
        product_id: &ProductId,
        quantity: u32,
    ) -> Result<(), OrderError> {
        OrderApp::add_item_to_cart(self, user_id, product_id, quantity).await
    }

    async fn place_order(&self, user_id: &UserId) -> Result<Order, OrderError> {
        OrderApp::place_order(self, user_id).await
    }
}

/// Collects capabilities for an [`OrderApp`].
///
/// Every `with_*` method is optional.
#[derive(Default)]
pub struct OrderAppBuilder {
    product_repo: Option<Arc<dyn ProductRepo>>,
    cart_repo: Option<Arc<dyn CartRepo>>,
    order_repo: Option<Arc<dyn OrderRepo>>,
    order_placed_notifier: Option<Arc<dyn OrderPlacedNotifier>>,
    next_order_id: Option<NextOrderId>,
}

macro_rules! capability_setters {
    ($($field:ident: $port:ident),* $(,)?) => {
        paste::paste! {
            impl OrderAppBuilder {
                $(
                    #[doc = "Plugs in the [`" $port "`] adapter."]
                    pub fn [<with_ $field>](mut self, $field: Arc<dyn $port>) -> Self {
                        self.$field = Some($field);
                        self
                    }
                )*
            }
        }
    };
}

capability_setters!(
    product_repo: ProductRepo,
    cart_repo: CartRepo,
    order_repo: OrderRepo,
    order_placed_notifier: OrderPlacedNotifier,
);

impl OrderAppBuilder {
    /// Replaces the default order id sequence (`order_1`, `order_2`, ...).
    pub fn with_order_ids(mut self, next_order_id: impl Fn() -> OrderId + Send + Sync + 'static) -> Self {
        self.next_order_id = Some(Box::new(next_order_id));
        self
    }

    pub fn build(self) -> OrderApp {
        let product_repo: Arc<dyn ProductRepo> = match self.product_repo {
            Some(repo) => repo,
            None => Arc::new(Unconfigured("product repository")),
        };
        let cart_repo: Arc<dyn CartRepo> = match self.cart_repo {
            Some(repo) => repo,
            None => Arc::new(Unconfigured("cart repository")),
        };
        let order_repo: Arc<dyn OrderRepo> = match self.order_repo {
            Some(repo) => repo,
            None => Arc::new(Unconfigured("order repository")),
        };
        let next_order_id: NextOrderId = match self.next_order_id {
            Some(next) => next,
            None => Box::new(order_id_sequence()),
        };

        OrderApp {
            product_repo,
            cart_repo,
            order_repo,
            order_placed_notifier: self.order_placed_notifier,
            next_order_id,
        }
    }
}

/// Counter-based id generator starting at 1.
fn order_id_sequence() -> impl Fn() -> OrderId + Send + Sync {
    let counter = AtomicU64::new(1);
    move || OrderId(counter.fetch_add(1, Ordering::SeqCst))
}
