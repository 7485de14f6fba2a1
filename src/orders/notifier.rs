//! # Notification Adapters
//!
//! - [`BroadcastOrderPlacedNotifier`]: fans one event out to several notifiers, in order.
//! - [`SmsNotifier`], [`EmailNotifier`]: delivery stubs that always succeed.
//!
//! ```rust,ignore
//! let notifier = BroadcastOrderPlacedNotifier::new()
//!     .with(SmsNotifier)
//!     .with(EmailNotifier);
//! let app = OrderApp::builder()
//!     .with_order_placed_notifier(Arc::new(notifier))
//!     .build();
//! ```

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use super::{Order, OrderError, OrderPlacedNotifier};

/// Composite notifier invoking each inner notifier in sequence.
///
/// Stops at the first failure and returns that error; notifiers after the
/// failing one are not called.
#[derive(Clone, Default)]
pub struct BroadcastOrderPlacedNotifier {
    notifiers: Vec<Arc<dyn OrderPlacedNotifier>>,
}

impl BroadcastOrderPlacedNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a notifier to the end of the chain.
    pub fn with(mut self, notifier: impl OrderPlacedNotifier + 'static) -> Self {
        self.notifiers.push(Arc::new(notifier));
        self
    }

    /// Appends an already shared notifier to the end of the chain.
    pub fn with_shared(mut self, notifier: Arc<dyn OrderPlacedNotifier>) -> Self {
        self.notifiers.push(notifier);
        self
    }

    pub fn len(&self) -> usize {
        self.notifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notifiers.is_empty()
    }
}

impl FromIterator<Arc<dyn OrderPlacedNotifier>> for BroadcastOrderPlacedNotifier {
    fn from_iter<I: IntoIterator<Item = Arc<dyn OrderPlacedNotifier>>>(iter: I) -> Self {
        Self {
            notifiers: iter.into_iter().collect(),
        }
    }
}

#[async_trait]
impl OrderPlacedNotifier for BroadcastOrderPlacedNotifier {
    async fn notify_order_placed(&self, order: &Order) -> Result<(), OrderError> {
        for (index, notifier) in self.notifiers.iter().enumerate() {
            if let Err(e) = notifier.notify_order_placed(order).await {
                warn!(order_id = %order.id, index, error = %e, "Broadcast stopped");
                return Err(e);
            }
        }
        Ok(())
    }
}

/// SMS delivery stub.
#[derive(Debug, Clone, Copy, Default)]
pub struct SmsNotifier;

#[async_trait]
impl OrderPlacedNotifier for SmsNotifier {
    async fn notify_order_placed(&self, order: &Order) -> Result<(), OrderError> {
        debug!(order_id = %order.id, user_id = %order.user_id, "SMS sent");
        Ok(())
    }
}

/// Email delivery stub.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailNotifier;

#[async_trait]
impl OrderPlacedNotifier for EmailNotifier {
    async fn notify_order_placed(&self, order: &Order) -> Result<(), OrderError> {
        debug!(order_id = %order.id, user_id = %order.user_id, "Email sent");
        Ok(())
    }
}
