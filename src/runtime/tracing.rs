//! # Observability & Tracing
//!
//! Structured logging for the whole crate goes through the `tracing` macros;
//! [`setup_tracing`] installs the subscriber that prints them.
//!
//! ```bash
//! # Service-level events (greetings, saved orders)
//! RUST_LOG=info cargo run
//!
//! # Full payloads (products, built orders) and stub notifier deliveries
//! RUST_LOG=debug cargo run
//!
//! # Only the order service
//! RUST_LOG=hexagonal_recipe::orders=debug cargo run
//! ```
//!
//! With `RUST_LOG=info` a demo run looks like:
//!
//! ```text
//! INFO Getting user name user_id=1
//! INFO Got user name user_id=1 user_name="Alice"
//! INFO place_order: Order saved user_id=UserId("user1") order_id=order_1 total=20.0
//! INFO place_order: Order placed user_id=UserId("user1") order_id=order_1
//! ```

use tracing_subscriber::EnvFilter;

/// Initializes the global subscriber with the given filter directive
/// (same syntax as `RUST_LOG`). An unparsable directive falls back to `info`.
///
/// Must be called at most once per process.
pub fn setup_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
