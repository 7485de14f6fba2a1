//! Error types for the order service.

use thiserror::Error;

use super::ProductId;

/// Errors that can occur during catalog, cart and order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// A capability was never given to the builder.
    #[error("{0} is not configured")]
    NotConfigured(&'static str),

    /// The requested product is not in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// The provided quantity is invalid (zero).
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(u32),

    /// An underlying storage adapter failed.
    #[error("Repository error: {0}")]
    Repository(String),

    /// A notification channel failed.
    #[error("Notification error: {0}")]
    Notification(String),
}
